//! Function-signature gallery
//!
//! Six toy functions, one per parameter shape: a single required
//! parameter, a defaulted one, several defaulted ones, a variadic tail,
//! variadic keywords, and both variadics together. Each prints through a
//! [`Notifier`].

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    args::{Args, Bound, CallError, Param, Signature},
    notifier::Notifier,
    value::Value,
};

/// Deepest chain of gallery calls allowed, e.g. `person6` handing itself to
/// itself through its `func` keyword
pub const MAX_CALL_DEPTH: usize = 64;

type Body = fn(&Gallery, &Bound, &dyn Notifier, usize) -> Result<(), CallError>;

struct Entry {
    signature: Signature,
    body: Body,
}

/// Registry of callable functions addressed by name
pub struct Gallery {
    entries: IndexMap<String, Entry>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::standard()
    }
}

impl Gallery {
    /// The gallery with `person1` through `person6` registered
    pub fn standard() -> Self {
        let mut gallery = Self {
            entries: IndexMap::new(),
        };
        gallery.register(
            Signature::new("person1", vec![Param::required("name")]),
            person1,
        );
        gallery.register(
            Signature::new("person2", vec![Param::optional("name", "ken")]),
            person2,
        );
        gallery.register(
            Signature::new(
                "person3",
                vec![
                    Param::required("name"),
                    Param::optional("city", "cincinnati"),
                    Param::optional("work", "library"),
                ],
            ),
            person3,
        );
        gallery.register(
            Signature::new(
                "person4",
                vec![Param::required("name"), Param::var_positional("params")],
            ),
            person4,
        );
        gallery.register(
            Signature::new(
                "person5",
                vec![Param::required("name"), Param::var_keyword("keywords")],
            ),
            person5,
        );
        gallery.register(
            Signature::new(
                "person6",
                vec![
                    Param::var_positional("params"),
                    Param::var_keyword("keywords"),
                ],
            ),
            person6,
        );
        gallery
    }

    fn register(&mut self, signature: Signature, body: Body) {
        self.entries
            .insert(signature.name.clone(), Entry { signature, body });
    }

    pub fn signature(&self, name: &str) -> Option<&Signature> {
        self.entries.get(name).map(|entry| &entry.signature)
    }

    /// Registered function names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Bind `args` to the named function and run it
    pub fn call(&self, name: &str, args: &Args, notifier: &dyn Notifier) -> Result<(), CallError> {
        self.call_at_depth(name, args, notifier, 0)
    }

    /// Call whatever `callee` refers to; only function values can be called
    pub fn call_value(
        &self,
        callee: &Value,
        args: &Args,
        notifier: &dyn Notifier,
    ) -> Result<(), CallError> {
        self.call_value_at_depth(callee, args, notifier, 0)
    }

    fn call_value_at_depth(
        &self,
        callee: &Value,
        args: &Args,
        notifier: &dyn Notifier,
        depth: usize,
    ) -> Result<(), CallError> {
        match callee {
            Value::Function(name) => self.call_at_depth(name, args, notifier, depth),
            other => Err(CallError::NotCallable {
                type_name: other.type_name().to_string(),
            }),
        }
    }

    fn call_at_depth(
        &self,
        name: &str,
        args: &Args,
        notifier: &dyn Notifier,
        depth: usize,
    ) -> Result<(), CallError> {
        if depth >= MAX_CALL_DEPTH {
            return Err(CallError::RecursionLimit {
                limit: MAX_CALL_DEPTH,
            });
        }
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| CallError::UnknownFunction {
                name: name.to_string(),
            })?;
        let bound = entry.signature.bind(args)?;
        debug!(
            function = name,
            positional = args.positional.len(),
            keywords = args.keywords.len(),
            depth,
            "calling gallery function"
        );
        (entry.body)(self, &bound, notifier, depth)
    }
}

static MISSING: Value = Value::None;

fn arg<'a>(bound: &'a Bound, name: &str) -> &'a Value {
    // Every named parameter is present once binding succeeded
    bound.get(name).unwrap_or(&MISSING)
}

fn person1(_: &Gallery, bound: &Bound, out: &dyn Notifier, _: usize) -> Result<(), CallError> {
    out.on_output(&format!("My name is {}", arg(bound, "name")));
    Ok(())
}

fn person2(_: &Gallery, bound: &Bound, out: &dyn Notifier, _: usize) -> Result<(), CallError> {
    out.on_output(&format!("My name is {}", arg(bound, "name")));
    Ok(())
}

fn person3(_: &Gallery, bound: &Bound, out: &dyn Notifier, _: usize) -> Result<(), CallError> {
    out.on_output(&format!(
        "My name is {} from {}, I work at {}",
        arg(bound, "name"),
        arg(bound, "city"),
        arg(bound, "work")
    ));
    Ok(())
}

fn person4(_: &Gallery, bound: &Bound, out: &dyn Notifier, _: usize) -> Result<(), CallError> {
    out.on_output(&format!(
        "My name is {}, my parameter list is:",
        arg(bound, "name")
    ));
    for param in bound.rest() {
        out.on_output(&param.to_string());
    }
    Ok(())
}

fn person5(_: &Gallery, bound: &Bound, out: &dyn Notifier, _: usize) -> Result<(), CallError> {
    out.on_output(&format!("My name is {}", arg(bound, "name")));
    if let Some(city) = bound.extra().get("city") {
        out.on_output(&format!("I am from {city}"));
    }
    for (keyword, value) in bound.extra() {
        out.on_output(&format!("{keyword}: {value}"));
    }
    Ok(())
}

fn person6(
    gallery: &Gallery,
    bound: &Bound,
    out: &dyn Notifier,
    depth: usize,
) -> Result<(), CallError> {
    let keywords = bound.extra();
    let name = keywords
        .get("name")
        .map(Value::to_string)
        .unwrap_or_else(|| "anonymous".to_string());
    out.on_output(&format!("My name is {name}"));

    out.on_output("My params are:");
    for (i, param) in bound.rest().iter().enumerate() {
        out.on_output(&format!("{i}. {param}"));
    }

    out.on_output("My keywords are:");
    for (i, (key, value)) in keywords.iter().enumerate() {
        out.on_output(&format!("{i}. {key}:{value}"));
    }

    out.on_output("Now I'm going to call the function contained in the keyword 'func':");
    match keywords.get("func") {
        Some(func) => {
            out.on_output(&format!("==== result from calling: {func} ====="));
            let forwarded = Args::new().kwargs(keywords.clone());
            gallery.call_value_at_depth(func, &forwarded, out, depth + 1)
        }
        None => {
            out.on_output("no function found");
            Ok(())
        }
    }
}
