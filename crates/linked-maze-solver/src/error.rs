/// Errors that abort a joint search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolveError {
    /// The page pair admits more than one solution.
    #[display("the page pair has more than one solution")]
    MultipleSolutions,
}
