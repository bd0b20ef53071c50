use super::linear::LinearTickIter;
use num_traits::Float;

/// Iterator over tick values produced by a scale.
pub struct TickIter<D> {
    inner: Box<dyn Iterator<Item = D> + Send + 'static>,
}

impl<D: Float + Send + 'static> TickIter<D> {
    pub(crate) fn from_linear(iter: LinearTickIter<D>) -> Self {
        Self {
            inner: Box::new(iter),
        }
    }
}

impl<D> Iterator for TickIter<D> {
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<D> std::fmt::Debug for TickIter<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickIter").finish_non_exhaustive()
    }
}
