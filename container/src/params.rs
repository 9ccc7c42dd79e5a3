//! Tuning parameters that can be set from environment variables.
//!
//! A [`Param`] holds the name of an environment variable and a string representation of its default value.
//! The value is read once, on first access, and is fixed for the rest of the process.
//!
//! ```
//! use container::params::Param;
//! static GROWTH: Param<u32> = Param::new("CONTAINER_DOC_GROWTH", "2");
//!
//! // environment variable not set, using default value "2"
//! assert_eq!(GROWTH.get(), 2);
//! ```
//!
//! A value that cannot be parsed is reported as a warning and replaced by the default.
//! An invalid default is a programming error and results in a panic.

use crate::error::Error;
use once_cell::sync::OnceCell;
use std::env::VarError;
use std::str::FromStr;

/// If true, the storage of a set is reserved before insertion, based on the number of elements announced by
/// the input sequence.
pub static PRESIZE: Param<bool> = Param::new("CONTAINER_SET_PRESIZE", "true");

pub struct Param<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
}

impl<T> Param<T> {
    /// Creates a new parameter that will be initialized from the environment variable `env` or set
    /// `default` if the environment variable is not set.
    pub const fn new(env: &'static str, default: &'static str) -> Param<T> {
        Param {
            value: OnceCell::new(),
            env,
            default,
        }
    }

    pub fn name(&self) -> &'static str {
        self.env
    }
}

impl<T: FromStr> Param<T> {
    fn read_default(&self) -> T {
        match T::from_str(self.default) {
            Ok(v) => v,
            Err(_) => panic!("[container] {}: invalid default value \"{}\".", self.env, self.default),
        }
    }

    fn read(&self) -> T {
        match std::env::var(self.env) {
            Ok(raw) => match T::from_str(&raw) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(
                        param = self.env,
                        value = raw.as_str(),
                        default = self.default,
                        "could not parse parameter, using default"
                    );
                    self.read_default()
                }
            },
            Err(VarError::NotPresent) => self.read_default(),
            Err(err) => {
                tracing::warn!(param = self.env, default = self.default, "{err}, using default");
                self.read_default()
            }
        }
    }

    /// Returns the value of the parameter, reading it from the environment on the first call.
    ///
    /// # Panic
    /// Panics if the variable is unset or invalid and the default value cannot be parsed.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    /// Same as [`Param::get`] for values that are not `Copy`.
    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| self.read())
    }

    /// Forces the parameter to the given value, ignoring the environment.
    ///
    /// Fails if the parameter was already initialized, which typically means it has already been read.
    pub fn set(&self, value: T) -> Result<(), Error> {
        self.value.set(value).map_err(|_| Error::AlreadyInitialized(self.env))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        static P: Param<u32> = Param::new("CONTAINER_TEST_UNSET_PARAM", "12");
        assert_eq!(P.get(), 12);
    }

    #[test]
    fn test_read_from_env() {
        static P: Param<u32> = Param::new("CONTAINER_TEST_ENV_PARAM", "0");
        std::env::set_var(P.name(), "9");
        assert_eq!(P.get(), 9);
        // read once
        std::env::set_var(P.name(), "10");
        assert_eq!(P.get(), 9);
    }

    #[test]
    fn test_invalid_value_falls_back() {
        static P: Param<bool> = Param::new("CONTAINER_TEST_INVALID_PARAM", "false");
        std::env::set_var(P.name(), "not-a-bool");
        assert!(!P.get());
    }

    #[test]
    fn test_set() {
        static P: Param<u32> = Param::new("CONTAINER_TEST_SET_PARAM", "0");
        assert_eq!(P.set(3), Ok(()));
        assert_eq!(P.get(), 3);
        assert_eq!(P.set(4), Err(Error::AlreadyInitialized("CONTAINER_TEST_SET_PARAM")));
    }

    #[test]
    #[should_panic]
    fn test_invalid_default() {
        static P: Param<u32> = Param::new("CONTAINER_TEST_BAD_DEFAULT_PARAM", "zero");
        P.get();
    }
}
