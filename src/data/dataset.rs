use crate::data::attribute::{Assignment, AttributeDomain, Instance, Label};
use crate::error::{Id3Error, Result};
use crate::trees::entropy::AttributeSample;
use nalgebra::{DMatrix, DVector};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Debug, Formatter};

/// Labeled categorical instances.
///
/// `x` holds one row per instance and one column per attribute domain; each
/// cell is the index of the value inside that column's domain. `y` holds the
/// label of every row.
///
/// The fields are public for reading. A dataset assembled by hand must still
/// pass the checks of [`Dataset::new`]: value indices outside their domain
/// are not counted by the gain computation.
#[derive(Clone)]
pub struct Dataset<L: Label> {
    pub attributes: Vec<AttributeDomain>,
    pub x: DMatrix<usize>,
    pub y: DVector<L>,
}

impl<L: Label> Debug for Dataset<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for (j, domain) in self.attributes.iter().enumerate() {
                let value = domain.value_name(self.x[(i, j)]).unwrap_or("?");
                write!(f, "{}, ", value)?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{:?}, ", self.y[i])?;
        }
        write!(f, "]\n}}")
    }
}

impl<L: Label> Dataset<L> {
    /// Creates a dataset from value indices and labels.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` when the matrix doesn't line up with the
    /// attributes or labels and `ValueOutOfDomain` for an index that isn't a
    /// value of its column's domain.
    pub fn new(attributes: Vec<AttributeDomain>, x: DMatrix<usize>, y: DVector<L>) -> Result<Self> {
        let (rows, columns) = x.shape();
        if columns != attributes.len() || rows != y.len() {
            return Err(Id3Error::ShapeMismatch {
                rows,
                columns,
                attributes: attributes.len(),
                labels: y.len(),
            });
        }

        for (j, domain) in attributes.iter().enumerate() {
            if let Some(&value) = x.column(j).iter().find(|&&value| value >= domain.len()) {
                return Err(Id3Error::ValueOutOfDomain {
                    attribute: domain.name().to_string(),
                    value,
                    size: domain.len(),
                });
            }
        }

        Ok(Self { attributes, x, y })
    }

    /// Creates a dataset from rows of value names.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for rows of the wrong width and `UnknownValue`
    /// for a name that isn't part of its column's domain.
    pub fn from_rows<R, S>(attributes: Vec<AttributeDomain>, rows: &[(R, L)]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let ncols = attributes.len();
        let mut cells = Vec::with_capacity(rows.len() * ncols);
        let mut labels = Vec::with_capacity(rows.len());

        for (values, label) in rows {
            let values = values.as_ref();
            if values.len() != ncols {
                return Err(Id3Error::ShapeMismatch {
                    rows: rows.len(),
                    columns: values.len(),
                    attributes: ncols,
                    labels: rows.len(),
                });
            }
            for (domain, value) in attributes.iter().zip(values.iter()) {
                let index = domain
                    .value_index(value.as_ref())
                    .ok_or_else(|| Id3Error::UnknownValue {
                        attribute: domain.name().to_string(),
                        value: value.as_ref().to_string(),
                    })?;
                cells.push(index);
            }
            labels.push(label.clone());
        }

        let x = DMatrix::from_row_slice(rows.len(), ncols, &cells);
        Self::new(attributes, x, DVector::from_vec(labels))
    }

    pub fn is_not_empty(&self) -> bool {
        !(self.x.is_empty() || self.y.is_empty())
    }

    pub fn nrows(&self) -> usize {
        self.y.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute(&self, index: usize) -> Option<&AttributeDomain> {
        self.attributes.get(index)
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|domain| domain.name() == name)
    }

    pub fn label(&self, row: usize) -> Option<&L> {
        self.y.get(row)
    }

    /// Returns the full assignment list of `row`, label excluded.
    pub fn instance(&self, row: usize) -> Option<Instance> {
        if row >= self.nrows() {
            return None;
        }
        Some(
            (0..self.n_attributes())
                .map(|j| Assignment::new(j, self.x[(row, j)]))
                .collect(),
        )
    }

    /// Builds a query instance from attribute and value names.
    pub fn query(&self, pairs: &[(&str, &str)]) -> Result<Instance> {
        Instance::parse(&self.attributes, pairs)
    }

    /// Keeps the rows whose `attribute` column equals `value`.
    pub fn reduce(&self, attribute: usize, value: usize) -> Self {
        let indices = self
            .x
            .column(attribute)
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == value)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

        self.select(&indices)
    }

    /// Pairs every value of `attribute` with the label of its row.
    pub fn project(&self, attribute: usize) -> AttributeSample<'_, L> {
        let domain_size = self.attributes.get(attribute).map_or(0, AttributeDomain::len);
        let pairs = self
            .x
            .column(attribute)
            .iter()
            .zip(self.y.iter())
            .map(|(&value, label)| (value, label))
            .collect();

        AttributeSample {
            attribute,
            domain_size,
            pairs,
        }
    }

    pub fn train_test_split(&self, train_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(Id3Error::InvalidSplit(train_size));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.nrows() as f64 * train_size).floor() as usize;
        let (train_indices, test_indices) = indices.split_at(train_size);

        Ok((self.select(train_indices), self.select(test_indices)))
    }

    fn select(&self, indices: &[usize]) -> Self {
        Self {
            attributes: self.attributes.clone(),
            x: self.x.select_rows(indices),
            y: self.y.select_rows(indices),
        }
    }
}
