//! Collection of the steps taken by an algorithm.

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_discards_steps() {
        let mut collector = ();
        StepCollector::push(&mut collector, 1);
    }

    #[test]
    fn vec_keeps_steps_in_order() {
        let mut steps = Vec::new();
        let collector: &mut dyn StepCollector<u8> = &mut steps;
        collector.push(1);
        collector.push(2);
        assert_eq!(steps, [1, 2]);
    }
}
