//! Serde encoding of grids as self-describing documents
//!
//! A grid encodes as a document carrying its row count, column count, and a
//! row-major flat cell sequence, enough to reconstruct dimensions and every
//! value without out-of-band knowledge. The capability is conditional on the
//! element type: `Grid<T>` is serializable exactly when `T` is, and
//! deserializable exactly when `T` is. Decoding rejects documents whose cell
//! count disagrees with the declared dimensions.

use ndarray::Array2;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::grid::container::Grid;

/// Streams the backing store as a flat row-major sequence
struct CellSeq<'a, T>(&'a Array2<T>);

impl<T: Serialize> Serialize for CellSeq<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

/// Owned wire shape used when decoding
#[derive(Deserialize)]
#[serde(rename = "Grid")]
struct DecodedCells<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (rows, cols) = self.dimensions();
        let mut document = serializer.serialize_struct("Grid", 3)?;
        document.serialize_field("rows", &rows)?;
        document.serialize_field("cols", &cols)?;
        document.serialize_field("cells", &CellSeq(&self.cells))?;
        document.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = DecodedCells::<T>::deserialize(deserializer)?;

        let expected = document
            .rows
            .checked_mul(document.cols)
            .ok_or_else(|| D::Error::custom("grid dimensions overflow"))?;
        if document.cells.len() != expected {
            return Err(D::Error::custom(format!(
                "cell count {} does not match a {}x{} grid",
                document.cells.len(),
                document.rows,
                document.cols
            )));
        }

        match Array2::from_shape_vec((document.rows, document.cols), document.cells) {
            Ok(cells) => Ok(Self::from_cells(cells)),
            Err(error) => Err(D::Error::custom(error)),
        }
    }
}
