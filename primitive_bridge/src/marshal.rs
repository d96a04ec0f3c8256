//! Conversions between host values and native call arguments
//!
//! Every conversion is explicit and checked: there is no coercion between
//! kinds (a bool is not an int, a float is not an int) and no truncation.

use crate::error::{ArgumentError, ArgumentErrorKind};
use crate::value::{Value, ValueKind};
use core_types::{ChannelHandle, ResultCode, TlsPointer};
use kernel_api::SleepDuration;
use std::ffi::CString;

/// A native type that can be read from one host argument
pub trait FromValue: Sized {
    /// Converts the argument at position `index`
    fn from_value(value: &Value, index: usize) -> Result<Self, ArgumentErrorKind>;
}

/// A native type that can be handed back to the host
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// A full argument list
///
/// Implemented for `()` and one-element tuples, which is all the bridge
/// needs. Arity is checked before any element is converted.
pub trait FromArgs: Sized {
    const ARITY: usize;

    fn from_args(function: &'static str, args: &[Value]) -> Result<Self, ArgumentError>;
}

fn check_arity(
    function: &'static str,
    expected: usize,
    args: &[Value],
) -> Result<(), ArgumentError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ArgumentError::new(
            function,
            ArgumentErrorKind::Arity {
                expected,
                found: args.len(),
            },
        ))
    }
}

impl FromArgs for () {
    const ARITY: usize = 0;

    fn from_args(function: &'static str, args: &[Value]) -> Result<Self, ArgumentError> {
        check_arity(function, Self::ARITY, args)
    }
}

impl<A: FromValue> FromArgs for (A,) {
    const ARITY: usize = 1;

    fn from_args(function: &'static str, args: &[Value]) -> Result<Self, ArgumentError> {
        check_arity(function, Self::ARITY, args)?;
        let a = A::from_value(&args[0], 0).map_err(|kind| ArgumentError::new(function, kind))?;
        Ok((a,))
    }
}

fn expect_int(value: &Value, index: usize) -> Result<i128, ArgumentErrorKind> {
    match value {
        Value::Int(i) => Ok(*i),
        other => Err(ArgumentErrorKind::WrongKind {
            index,
            expected: ValueKind::Int,
            found: other.kind(),
        }),
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value, index: usize) -> Result<Self, ArgumentErrorKind> {
        let raw = expect_int(value, index)?;
        u32::try_from(raw).map_err(|_| ArgumentErrorKind::OutOfRange {
            index,
            value: raw,
            target: "u32",
        })
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value, index: usize) -> Result<Self, ArgumentErrorKind> {
        let raw = expect_int(value, index)?;
        i64::try_from(raw).map_err(|_| ArgumentErrorKind::OutOfRange {
            index,
            value: raw,
            target: "i64",
        })
    }
}

impl FromValue for ChannelHandle {
    fn from_value(value: &Value, index: usize) -> Result<Self, ArgumentErrorKind> {
        u32::from_value(value, index).map(ChannelHandle::from_raw)
    }
}

impl FromValue for SleepDuration {
    fn from_value(value: &Value, index: usize) -> Result<Self, ArgumentErrorKind> {
        i64::from_value(value, index).map(SleepDuration::from_nanos)
    }
}

impl FromValue for CString {
    fn from_value(value: &Value, index: usize) -> Result<Self, ArgumentErrorKind> {
        match value {
            Value::Str(s) => CString::new(s.as_bytes()).map_err(|err| {
                ArgumentErrorKind::InteriorNul {
                    index,
                    position: err.nul_position(),
                }
            }),
            other => Err(ArgumentErrorKind::WrongKind {
                index,
                expected: ValueKind::Str,
                found: other.kind(),
            }),
        }
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::None
    }
}

impl IntoValue for TlsPointer {
    fn into_value(self) -> Value {
        Value::Int(self.as_u64().into())
    }
}

impl IntoValue for ResultCode {
    fn into_value(self) -> Value {
        Value::Int(self.as_raw().into())
    }
}

impl IntoValue for ChannelHandle {
    fn into_value(self) -> Value {
        Value::Int(self.as_raw().into())
    }
}

impl<A: IntoValue, B: IntoValue> IntoValue for (A, B) {
    fn into_value(self) -> Value {
        Value::Tuple(vec![self.0.into_value(), self.1.into_value()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_bounds() {
        assert_eq!(u32::from_value(&Value::Int(0), 0), Ok(0));
        assert_eq!(
            u32::from_value(&Value::Int(u32::MAX as i128), 0),
            Ok(u32::MAX)
        );
        assert_eq!(
            u32::from_value(&Value::Int(-1), 2),
            Err(ArgumentErrorKind::OutOfRange {
                index: 2,
                value: -1,
                target: "u32"
            })
        );
        assert!(u32::from_value(&Value::Int(1 << 32), 0).is_err());
    }

    #[test]
    fn test_no_coercion_between_kinds() {
        assert_eq!(
            u32::from_value(&Value::Bool(true), 0),
            Err(ArgumentErrorKind::WrongKind {
                index: 0,
                expected: ValueKind::Int,
                found: ValueKind::Bool
            })
        );
        assert!(i64::from_value(&Value::Float(1.0), 0).is_err());
        assert!(i64::from_value(&Value::from("10"), 0).is_err());
    }

    #[test]
    fn test_i64_bounds() {
        assert_eq!(
            SleepDuration::from_value(&Value::Int(i64::MIN as i128), 0),
            Ok(SleepDuration::from_nanos(i64::MIN))
        );
        assert!(i64::from_value(&Value::Int(i64::MAX as i128 + 1), 0).is_err());
    }

    #[test]
    fn test_string_conversion() {
        let name = CString::from_value(&Value::from("sm:"), 0).unwrap();
        assert_eq!(name.as_bytes(), b"sm:");

        let empty = CString::from_value(&Value::from(""), 0).unwrap();
        assert_eq!(empty.as_bytes_with_nul(), b"\0");

        let utf8 = CString::from_value(&Value::from("pört"), 0).unwrap();
        assert_eq!(utf8.as_bytes(), "pört".as_bytes());
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        assert_eq!(
            CString::from_value(&Value::from("ab\0c"), 0),
            Err(ArgumentErrorKind::InteriorNul {
                index: 0,
                position: 2
            })
        );
    }

    #[test]
    fn test_arity_checked_before_conversion() {
        let err = <(u32,)>::from_args("f", &[Value::None, Value::None]).unwrap_err();
        assert_eq!(
            err.kind,
            ArgumentErrorKind::Arity {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_pair_into_value() {
        let value = (ResultCode::SUCCESS, ChannelHandle::PLACEHOLDER).into_value();
        assert_eq!(value, Value::Tuple(vec![Value::Int(0), Value::Int(1)]));
    }
}
