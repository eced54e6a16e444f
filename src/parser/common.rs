//! Common machinery shared by the operator and version parsers
use nom::{error::VerboseError, IResult};

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;
