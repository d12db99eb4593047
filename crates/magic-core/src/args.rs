//! Argument binding
//!
//! A call carries an ordered list of positional values and an ordered map of
//! keyword values. A [`Signature`] binds those to its declared parameters:
//! named parameters first take positionals in order, then keywords by name,
//! then their defaults. Whatever is left lands in the variadic tail or the
//! variadic keyword map, if the signature declares them.

use indexmap::IndexMap;
use thiserror::Error;

use crate::value::Value;

/// Errors raised while binding or dispatching a call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("{function}() missing required argument '{param}'")]
    MissingArgument { function: String, param: String },

    #[error("{function}() takes {expected} positional arguments but {given} were given")]
    TooManyPositional {
        function: String,
        expected: usize,
        given: usize,
    },

    #[error("{function}() got multiple values for argument '{param}'")]
    MultipleValues { function: String, param: String },

    #[error("{function}() got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { function: String, keyword: String },

    #[error("Function '{name}' not found")]
    UnknownFunction { name: String },

    #[error("'{type_name}' object is not callable")]
    NotCallable { type_name: String },

    #[error("Maximum call depth of {limit} exceeded")]
    RecursionLimit { limit: usize },

    #[error("Integer overflow: {left} + {right}")]
    IntegerOverflow { left: i64, right: i64 },
}

impl CallError {
    pub fn missing(function: &str, param: &str) -> Self {
        Self::MissingArgument {
            function: function.to_string(),
            param: param.to_string(),
        }
    }

    pub fn multiple_values(function: &str, param: &str) -> Self {
        Self::MultipleValues {
            function: function.to_string(),
            param: param.to_string(),
        }
    }

    pub fn unexpected_keyword(function: &str, keyword: &str) -> Self {
        Self::UnexpectedKeyword {
            function: function.to_string(),
            keyword: keyword.to_string(),
        }
    }
}

/// Arguments of a single call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keywords: IndexMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Splat a sequence into separate positional arguments
    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    /// Add a keyword argument. A repeated name replaces the earlier value.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// Splat a mapping into separate keyword arguments
    pub fn kwargs<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.keywords
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    Required,
    Optional(Value),
    VarPositional,
    VarKeyword,
}

/// One declared parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

impl Param {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Required,
        }
    }

    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Optional(default.into()),
        }
    }

    pub fn var_positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::VarPositional,
        }
    }

    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::VarKeyword,
        }
    }

    fn is_named(&self) -> bool {
        matches!(self.kind, ParamKind::Required | ParamKind::Optional(_))
    }
}

/// Declared parameter list of a function
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<Param>,
}

/// Result of binding [`Args`] against a [`Signature`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bound {
    values: IndexMap<String, Value>,
    rest: Vec<Value>,
    extra: IndexMap<String, Value>,
}

impl Bound {
    /// Value of a named parameter
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Surplus positional arguments
    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    /// Surplus keyword arguments, in call order
    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.extra
    }
}

impl Signature {
    pub fn new(name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    fn accepts_rest(&self) -> bool {
        self.params
            .iter()
            .any(|p| p.kind == ParamKind::VarPositional)
    }

    fn accepts_extra(&self) -> bool {
        self.params.iter().any(|p| p.kind == ParamKind::VarKeyword)
    }

    /// Named parameters that can be filled positionally: those declared
    /// before the variadic tail
    fn positional_slots(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .take_while(|p| p.kind != ParamKind::VarPositional)
            .filter(|p| p.is_named())
    }

    pub fn bind(&self, args: &Args) -> Result<Bound, CallError> {
        let mut bound = Bound::default();

        let slots: Vec<&Param> = self.positional_slots().collect();
        let mut positional = args.positional.iter();
        for slot in &slots {
            match positional.next() {
                Some(value) => {
                    bound.values.insert(slot.name.clone(), value.clone());
                }
                None => break,
            }
        }

        let surplus: Vec<Value> = positional.cloned().collect();
        if !surplus.is_empty() {
            if !self.accepts_rest() {
                return Err(CallError::TooManyPositional {
                    function: self.name.clone(),
                    expected: slots.len(),
                    given: args.positional.len(),
                });
            }
            bound.rest = surplus;
        }

        for (key, value) in &args.keywords {
            let named = self.params.iter().any(|p| p.is_named() && &p.name == key);
            if named {
                if bound.values.contains_key(key) {
                    return Err(CallError::multiple_values(&self.name, key));
                }
                bound.values.insert(key.clone(), value.clone());
            } else if self.accepts_extra() {
                bound.extra.insert(key.clone(), value.clone());
            } else {
                return Err(CallError::unexpected_keyword(&self.name, key));
            }
        }

        for param in &self.params {
            if bound.values.contains_key(&param.name) {
                continue;
            }
            match &param.kind {
                ParamKind::Optional(default) => {
                    bound.values.insert(param.name.clone(), default.clone());
                }
                ParamKind::Required => {
                    return Err(CallError::missing(&self.name, &param.name));
                }
                ParamKind::VarPositional | ParamKind::VarKeyword => {}
            }
        }

        Ok(bound)
    }
}
