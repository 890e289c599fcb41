/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a+(b+c) = a+b+c`
    FlattenSum,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `a-a = 0`
    /// `1+2 = 3`
    /// etc.
    CombineLikeTerms,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*a*3 = 6*a`
    CombineNumericFactors,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// etc.
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`, for positive `a`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,

    /// `(a^b)^c = a^(b*c)`, for integer `c`
    PowerPower,

    /// `2^3 = 8`
    /// `(1/2)^-2 = 4`
    NumericPower,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// A function call was canonicalized again after its arguments were simplified.
    EvaluateCall,
}
