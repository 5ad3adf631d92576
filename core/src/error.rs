use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        };
        write!(f, "{}", level_str)
    }
}

/// Common surface of every diagnostic the core can produce.
pub trait Mt22ErrorExt {
    fn level(&self) -> Level;
    fn message(&self) -> String;
    fn issuer(&self) -> String;
    fn span(&self) -> Option<crate::location::Span>;
    fn location(&self) -> Option<crate::location::Location>;
}

pub type Mt22Result<T> = Result<T, Box<dyn Mt22ErrorExt>>;

impl fmt::Debug for dyn Mt22ErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc_str = match self.location() {
            Some(loc) => loc.to_string(),
            None => "unknown".to_string(),
        };
        let span_str = match self.span() {
            Some(span) => span.to_string(),
            None => "span:none".to_string(),
        };

        write!(
            f,
            "MT22 | {} | {} | {} | {} | {}",
            self.level(),
            loc_str,
            self.issuer(),
            span_str,
            self.message()
        )
    }
}

impl fmt::Display for dyn Mt22ErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location() {
            Some(loc) => write!(f, "{} (at {})", self.message(), loc),
            None => write!(f, "{}", self.message()),
        }
    }
}

/// Implements `Display`, `std::error::Error` and `Mt22ErrorExt` for a struct
/// carrying `level`, `message`, `issuer`, `location` and `span` fields.
macro_rules! impl_mt22_error {
    ($name:ident) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if let Some(loc) = &self.location {
                    write!(f, "{} (at {})", self.message, loc)
                } else {
                    write!(f, "{}", self.message)
                }
            }
        }

        impl std::error::Error for $name {}

        impl $crate::error::Mt22ErrorExt for $name {
            fn level(&self) -> $crate::error::Level {
                self.level
            }

            fn message(&self) -> String {
                self.message.clone()
            }

            fn issuer(&self) -> String {
                self.issuer.clone()
            }

            fn span(&self) -> Option<$crate::location::Span> {
                self.span.clone()
            }

            fn location(&self) -> Option<$crate::location::Location> {
                self.location.clone()
            }
        }

        impl From<$name> for Box<dyn $crate::error::Mt22ErrorExt> {
            fn from(err: $name) -> Self {
                Box::new(err)
            }
        }
    };
}

pub(crate) use impl_mt22_error;
