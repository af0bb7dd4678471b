use std::fmt::{self, Display};

use crate::errors::VectorError;

///
/// A single `index -> value` cell of a vector.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub index: usize,
    pub value: f64,
}

impl Element {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }
}

///
/// A sparse vector: a declared dense size, the stored elements ordered by index,
/// and an optional name.
///
/// Indices that are not stored are implicitly zero.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    size: usize,
    elements: Vec<Element>,
    name: Option<String>,
}

impl SparseVector {
    ///
    /// Create a new sparse vector from `(index, value)` pairs.
    ///
    /// The pairs do not need to be sorted. When the same index appears more than once,
    /// the later pair wins.
    ///
    /// # Arguments:
    /// - `size`: the declared dense size of the vector
    /// - `pairs`: the stored elements
    ///
    /// # Returns:
    /// - the vector, or `VectorError::IndexOutOfRange` if any index is `>= size`
    ///
    pub fn new<I>(size: usize, pairs: I) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut pairs: Vec<(usize, f64)> = pairs.into_iter().collect();

        if let Some(&(index, _)) = pairs.iter().find(|(index, _)| *index >= size) {
            return Err(VectorError::IndexOutOfRange { index, size });
        }

        // stable, so equal indices keep their input order
        pairs.sort_by_key(|(index, _)| *index);

        let mut elements: Vec<Element> = Vec::with_capacity(pairs.len());
        for (index, value) in pairs {
            match elements.last_mut() {
                Some(last) if last.index == index => last.value = value,
                _ => elements.push(Element::new(index, value)),
            }
        }

        Ok(Self {
            size,
            elements,
            name: None,
        })
    }

    ///
    /// Attach a name to the vector.
    ///
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    ///
    /// The declared dense size of the vector.
    ///
    pub fn size(&self) -> usize {
        self.size
    }

    ///
    /// Number of stored elements (zeros included if they were stored explicitly).
    ///
    pub fn num_stored(&self) -> usize {
        self.elements.len()
    }

    ///
    /// Get the value at `index`; unstored indices are `0.0`.
    ///
    pub fn get(&self, index: usize) -> f64 {
        match self.elements.binary_search_by_key(&index, |e| e.index) {
            Ok(pos) => self.elements[pos].value,
            Err(_) => 0.0,
        }
    }

    ///
    /// Iterate every cell `0..size` in index order, zeros included.
    ///
    pub fn iter_all(&self) -> AllElements<'_> {
        AllElements {
            remaining: &self.elements,
            next_index: 0,
            size: self.size,
        }
    }

    ///
    /// Iterate only the stored elements whose value is nonzero, in index order.
    ///
    pub fn iter_nonzero(&self) -> impl Iterator<Item = Element> + '_ {
        self.elements.iter().copied().filter(|e| e.value != 0.0)
    }
}

///
/// Dense iterator over a [`SparseVector`], see [`SparseVector::iter_all`].
///
pub struct AllElements<'a> {
    remaining: &'a [Element],
    next_index: usize,
    size: usize,
}

impl Iterator for AllElements<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.size {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;

        match self.remaining.split_first() {
            Some((first, rest)) if first.index == index => {
                self.remaining = rest;
                Some(*first)
            }
            _ => Some(Element::new(index, 0.0)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.size - self.next_index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AllElements<'_> {}

impl Display for SparseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}\t", name)?;
        }
        write!(f, "{}\t", self.size)?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{:?}", e.index, e.value)?;
        }
        Ok(())
    }
}
