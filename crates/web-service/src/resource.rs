use std::fmt;
use std::marker::PhantomData;

use url::Url;

/// A url paired with the function that turns its response body into a `T`.
///
/// The parser is a type parameter rather than a boxed closure, so the output
/// type is fixed where the resource is built.
pub struct Resource<T, F = fn(&[u8]) -> Option<T>> {
    url: Url,
    parse: F,
    output: PhantomData<fn() -> T>,
}

impl<T, F> Resource<T, F>
where
    F: Fn(&[u8]) -> Option<T>,
{
    pub fn new(url: Url, parse: F) -> Self {
        Self {
            url,
            parse,
            output: PhantomData,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn parse(&self, body: &[u8]) -> Option<T> {
        (self.parse)(body)
    }
}

impl<T, F> fmt::Debug for Resource<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
