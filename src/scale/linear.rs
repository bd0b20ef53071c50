use super::{Scale, TickIter, util};
use num_traits::Float;

/// Number of ticks requested from [`Linear`] unless told otherwise.
///
/// This is a hint: the generator picks a "nice" step and may return a few more
/// or fewer ticks.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Linear scale: affine mapping between a numeric domain and normalized `[0, 1]` range.
///
/// # Type Parameters
///
/// - `D`: Domain type (the data values, typically `f32` or `f64`)
/// - `N`: Normalized type (typically `f32` or `f64`, represents `[0, 1]` range)
///
/// # Features
///
/// - **Normalization**: Map domain values onto `[0, 1]`
/// - **Tick generation**: "Nice" tick values at multiples of 1, 2 or 5 times a power of ten
/// - **Reversed axes**: Support both increasing and decreasing domains
/// - **No clamping**: Out-of-range values map beyond [0, 1]
/// - **Degenerate domains**: A zero-span domain maps every value to `0`
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use stolpekart::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0);
///
/// assert_eq!(scale.normalize(&0.0), 0.0);
/// assert_eq!(scale.normalize(&50.0), 0.5);
/// assert_eq!(scale.normalize(&100.0), 1.0);
/// ```
///
/// ## Reversed Axis
///
/// ```rust
/// use stolpekart::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(100.0, 0.0);
///
/// assert_eq!(scale.normalize(&100.0), 0.0);
/// assert_eq!(scale.normalize(&0.0), 1.0);
/// ```
///
/// ## Zero-Span Domain
///
/// ```rust
/// use stolpekart::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 0.0);
///
/// assert_eq!(scale.normalize(&0.0), 0.0);
/// assert_eq!(scale.normalize(&42.0), 0.0);
/// ```
///
/// ## Ticks
///
/// ```rust
/// use stolpekart::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0).with_tick_count(4);
///
/// assert_eq!(scale.ticks(), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    tick_count: usize,
    _phantom: std::marker::PhantomData<N>,
}

/// Step between consecutive ticks.
///
/// Sub-unit steps are kept as their reciprocal so tick values come out as
/// `i / 10^k` instead of `i * 0.1...`, which avoids values like `0.30000000000000004`.
#[derive(Debug, Clone, Copy)]
enum TickStep<D> {
    Multiply(D),
    Divide(D),
}

impl<D: Float> TickStep<D> {
    fn value_at(self, index: i64) -> Option<D> {
        let i = D::from(index)?;
        Some(match self {
            Self::Multiply(inc) => i * inc,
            Self::Divide(inc) => i / inc,
        })
    }
}

/// JavaScript-style rounding: halves go towards positive infinity.
fn round_half_up<D: Float>(value: D) -> D {
    let half = D::from(0.5).unwrap_or_else(D::zero);
    (value + half).floor()
}

/// Pick the tick index range `[i1, i2]` and step for `count` ticks over `[start, stop]`.
///
/// Requires `start < stop`.
fn tick_spec<D: Float>(start: D, stop: D, count: D) -> Option<(i64, i64, TickStep<D>)> {
    let step = (stop - start) / count;
    if !step.is_finite() || step <= D::zero() {
        return None;
    }

    let ten = D::from(10.0)?;
    let power = step.log10().floor();
    let error = step / ten.powf(power);
    let factor = if error >= D::from(50.0)?.sqrt() {
        ten
    } else if error >= ten.sqrt() {
        D::from(5.0)?
    } else if error >= D::from(2.0)?.sqrt() {
        D::from(2.0)?
    } else {
        D::one()
    };

    let (mut i1, mut i2, inc) = if power < D::zero() {
        let inc = ten.powf(-power) / factor;
        (
            round_half_up(start * inc).to_i64()?,
            round_half_up(stop * inc).to_i64()?,
            TickStep::Divide(inc),
        )
    } else {
        let inc = ten.powf(power) * factor;
        (
            round_half_up(start / inc).to_i64()?,
            round_half_up(stop / inc).to_i64()?,
            TickStep::Multiply(inc),
        )
    };

    if inc.value_at(i1)? < start {
        i1 += 1;
    }
    if inc.value_at(i2)? > stop {
        i2 -= 1;
    }

    let half = D::from(0.5)?;
    let two = D::from(2.0)?;
    if i2 < i1 && count >= half && count < two {
        return tick_spec(start, stop, count * two);
    }

    Some((i1, i2, inc))
}

/// Iterator over the "nice" ticks of a linear domain.
///
/// Ticks are yielded in domain order: ascending for `min < max`, descending for
/// a reversed domain.
pub struct LinearTickIter<D: Float> {
    state: LinearTickState<D>,
}

enum LinearTickState<D: Float> {
    Single(Option<D>),
    Sweep(LinearSweepState<D>),
    Done,
}

struct LinearSweepState<D: Float> {
    first: i64,
    last: i64,
    reverse: bool,
    step: TickStep<D>,
    current_index: i64,
    clamp_min: D,
    clamp_max: D,
    epsilon: D,
}

impl<D: Float> LinearTickIter<D> {
    pub(crate) fn from_scale<N: Float>(scale: &Linear<D, N>) -> Self {
        Self::new(scale.min, scale.max, scale.tick_count)
    }

    fn new(min: D, max: D, count: usize) -> Self {
        let done = Self {
            state: LinearTickState::Done,
        };

        if count == 0 || !min.is_finite() || !max.is_finite() {
            return done;
        }
        if min == max {
            return Self {
                state: LinearTickState::Single(Some(min)),
            };
        }

        let (lo, hi) = util::sorted_pair(min, max);
        let Some(count_d) = D::from(count) else {
            return done;
        };
        let Some((first, last, step)) = tick_spec(lo, hi, count_d) else {
            return done;
        };
        if last < first {
            return done;
        }

        let spacing = match step {
            TickStep::Multiply(inc) => inc,
            TickStep::Divide(inc) => D::one() / inc,
        };
        let epsilon = spacing
            .to_f64()
            .and_then(|s| D::from(util::epsilon_from_step(s)))
            .unwrap_or_else(D::zero);

        Self {
            state: LinearTickState::Sweep(LinearSweepState {
                first,
                last,
                reverse: max < min,
                step,
                current_index: 0,
                clamp_min: lo,
                clamp_max: hi,
                epsilon,
            }),
        }
    }
}

impl<D: Float> Iterator for LinearTickIter<D> {
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            LinearTickState::Single(slot) => slot.take(),
            LinearTickState::Sweep(state) => {
                let span = state.last - state.first;
                if state.current_index > span {
                    self.state = LinearTickState::Done;
                    return None;
                }

                let index = if state.reverse {
                    state.last - state.current_index
                } else {
                    state.first + state.current_index
                };
                state.current_index += 1;

                let Some(mut value) = state.step.value_at(index) else {
                    self.state = LinearTickState::Done;
                    return None;
                };

                // Snap values that drifted just outside the domain back onto it.
                if value < state.clamp_min && state.clamp_min - value <= state.epsilon {
                    value = state.clamp_min;
                } else if value > state.clamp_max && value - state.clamp_max <= state.epsilon {
                    value = state.clamp_max;
                }

                Some(value)
            }
            LinearTickState::Done => None,
        }
    }
}

impl<D, N> Linear<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a new linear scale with the given domain range.
    ///
    /// Ticks aim for [`DEFAULT_TICK_COUNT`] values at round numbers
    /// (e.g., 0, 10, 20, 50, 100).
    ///
    /// # Examples
    ///
    /// ```
    /// use stolpekart::{Scale, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0);
    /// assert_eq!(scale.domain(), (&0.0, &100.0));
    /// ```
    pub fn new(min: D, max: D) -> Self {
        Self {
            min,
            max,
            tick_count: DEFAULT_TICK_COUNT,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets how many ticks the generator aims for.
    ///
    /// # Examples
    ///
    /// ```
    /// use stolpekart::{Scale, scale::Linear};
    ///
    /// let scale = Linear::<f64, f64>::new(0.0, 100.0).with_tick_count(2);
    /// assert_eq!(scale.ticks(), vec![0.0, 50.0, 100.0]);
    /// ```
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }
}

impl<D, N> Scale for Linear<D, N>
where
    D: Float + Send + 'static,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let span = self.max - self.min;
        if span == D::zero() {
            return Some(N::zero());
        }

        let offset = *value - self.min;
        let offset_n: N = N::from(offset)?;
        let span_n: N = N::from(span)?;

        // NOTE: Intentionally no clamping here; we want out-of-range values
        // to map to <0 or >1 so the renderer can decide how to handle them.
        Some(offset_n / span_n)
    }

    fn tick_iter(&self) -> TickIter<D> {
        TickIter::from_linear(LinearTickIter::from_scale(self))
    }
}

/// Value scale of the bar chart: `[0, domain_max]` onto `[inner_height, 0]`.
///
/// The range is inverted so that larger values land higher up on screen
/// (pixel origin at the top-left). When `domain_max` is zero every value maps
/// to `inner_height`, so an all-zero dataset draws flat bars instead of NaN.
#[derive(Debug)]
pub struct LinearScale {
    scale: Linear<f64, f64>,
    range: (f64, f64),
}

/// Builds the bar chart's value scale.
///
/// # Examples
///
/// ```
/// use stolpekart::scale::compute_linear_scale;
///
/// let y = compute_linear_scale(60.0, 340.0);
/// assert_eq!(y.y(30.0), 170.0);
/// assert_eq!(y.y(60.0), 0.0);
/// assert_eq!(y.y(0.0), 340.0);
///
/// let flat = compute_linear_scale(0.0, 340.0);
/// assert_eq!(flat.y(123.0), 340.0);
/// ```
pub fn compute_linear_scale(domain_max: f64, inner_height: f64) -> LinearScale {
    LinearScale {
        scale: Linear::new(0.0, domain_max),
        range: (inner_height, 0.0),
    }
}

impl LinearScale {
    /// Domain endpoints `(0, domain_max)`.
    pub fn domain(&self) -> (f64, f64) {
        let (&lo, &hi) = self.scale.domain();
        (lo, hi)
    }

    /// Range endpoints `(inner_height, 0)`.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Pixel y coordinate for `value`, relative to the top of the plot area.
    pub fn y(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = self.scale.normalize(&value);
        r0 - t * (r0 - r1)
    }

    /// Height in pixels of a bar for `value`, measured up from the baseline.
    pub fn bar_height(&self, value: f64) -> f64 {
        self.range.0 - self.y(value)
    }

    /// Nice tick values across the domain, using `count` as a hint.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.with_tick_count(count).ticks()
    }
}
