pub trait Interpolator<T> {
    /// evaluates single point
    fn eval(&self, x: &T) -> T;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|xq| self.eval(xq)).collect()
    }
}
