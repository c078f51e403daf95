//! Dispatchable units and sequential composition.

use async_trait::async_trait;

use crate::error::DomainError;

/// The uniform start contract shared by plain descriptors and chains.
///
/// Anything dispatchable resolves to exactly one typed outcome per call.
/// Implementing the same contract on combinators is what lets a chain stand
/// wherever a single request can, including inside another chain.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Success payload produced on the happy path.
    type Output: Send;
    /// Typed failure produced by this unit's classifier(s).
    type Error: DomainError;

    /// Perform the operation, resolving exactly once.
    async fn dispatch(&self) -> Result<Self::Output, Self::Error>;
}

/// Two dispatchable units run back to back.
///
/// The first step's payload is discarded, never threaded into the second.
/// Its failure is the chain's failure and the second step is then never
/// started; on success the chain's outcome is exactly the second step's
/// outcome. The combinator adds no failure modes, retries or timeouts of
/// its own.
#[derive(Debug, Clone)]
pub struct ChainedRequest<A, B> {
    first: A,
    second: B,
}

impl<A, B, E> ChainedRequest<A, B>
where
    A: Dispatch<Error = E>,
    B: Dispatch<Error = E>,
    E: DomainError,
{
    /// Compose `first` then `second`.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

#[async_trait]
impl<A, B, E> Dispatch for ChainedRequest<A, B>
where
    A: Dispatch<Error = E>,
    B: Dispatch<Error = E>,
    E: DomainError,
{
    type Output = B::Output;
    type Error = E;

    async fn dispatch(&self) -> Result<B::Output, E> {
        self.first.dispatch().await?;
        self.second.dispatch().await
    }
}
