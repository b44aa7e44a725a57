//! Function registry and generator resolution.
//!
//! Aggregate-function implementations are registered under a function name
//! together with the capabilities they declare. Resolution binds a
//! parametric implementation to the concrete element type inferred from
//! the destination member and picks the generation strategy with a closed
//! two-tier match.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use remap_diagnostic::{unknown_function, unsupported_implementation, ConfigResult};
use remap_ir::TypeRef;

use crate::descriptors::{MemberMappingDescriptor, MemberShape};
use crate::functions::{
    AggregateCodeGenerator, AggregateFunction, AvgFunction, CountFunction,
    DefaultAggregateCodeGenerator, MaxFunction, MinFunction, SumFunction,
};

/// A concrete, fully bound handle to one aggregate-function
/// implementation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImplementationRef {
    /// Implementation type name, e.g. `SumFunction`.
    pub type_name: String,
    /// The bound element type; `None` for non-parametric implementations.
    pub element: Option<TypeRef>,
}

impl std::fmt::Display for ImplementationRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.element {
            Some(element) => write!(f, "{}<{element}>", self.type_name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

/// One registered implementation and the capabilities it declares.
///
/// Capabilities are declared here, at registration time; resolution never
/// probes the implementation. A registration carrying neither capability
/// is rejected when a member first tries to use it.
pub struct Registration {
    type_name: String,
    parametric: bool,
    generator: Option<Arc<dyn AggregateCodeGenerator>>,
    function: Option<Arc<dyn AggregateFunction>>,
}

impl Registration {
    /// A parametric registration with no capabilities yet.
    pub fn new(type_name: impl Into<String>) -> Self {
        Registration {
            type_name: type_name.into(),
            parametric: true,
            generator: None,
            function: None,
        }
    }

    /// Declare the basic aggregate capability.
    #[must_use]
    pub fn with_function(mut self, function: Arc<dyn AggregateFunction>) -> Self {
        self.function = Some(function);
        self
    }

    /// Declare the full code-generation capability.
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn AggregateCodeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Mark the implementation as non-parametric: no element type is
    /// bound for it.
    #[must_use]
    pub fn non_parametric(mut self) -> Self {
        self.parametric = false;
        self
    }
}

/// Maps aggregate-function names to registered implementations.
///
/// Read-only during a build; safe to share across builder instances. The
/// `(function name, element type)` binding results are cached, built once
/// per key.
#[derive(Default)]
pub struct FunctionRegistry {
    entries: FxHashMap<String, Arc<Registration>>,
    bound: RwLock<FxHashMap<(String, Option<TypeRef>), ImplementationRef>>,
}

impl FunctionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the shipped functions registered: `sum`, `count`,
    /// `min`, `max`, `avg`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "sum",
            Registration::new("SumFunction").with_function(Arc::new(SumFunction)),
        );
        registry.register(
            "count",
            Registration::new("CountFunction").with_function(Arc::new(CountFunction)),
        );
        registry.register(
            "min",
            Registration::new("MinFunction").with_function(Arc::new(MinFunction)),
        );
        registry.register(
            "max",
            Registration::new("MaxFunction").with_function(Arc::new(MaxFunction)),
        );
        registry.register(
            "avg",
            Registration::new("AvgFunction").with_generator(Arc::new(AvgFunction)),
        );
        registry
    }

    /// Register an implementation under `name`, replacing any previous
    /// registration for that name.
    pub fn register(&mut self, name: impl Into<String>, registration: Registration) {
        self.entries.insert(name.into(), Arc::new(registration));
    }

    /// Look up the registration for a function name.
    pub fn type_for_function(&self, name: &str) -> ConfigResult<Arc<Registration>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| unknown_function(name))
    }

    /// Resolve a member's aggregate function to a bound implementation.
    ///
    /// Parametric implementations are bound to the element type inferred
    /// from the member's target: the array element type, the list's first
    /// generic argument, or the target type itself.
    pub fn resolve(
        &self,
        member: &MemberMappingDescriptor,
    ) -> ConfigResult<(ImplementationRef, Arc<Registration>)> {
        let name = &member.aggregate.function_name;
        let registration = self.type_for_function(name)?;
        let element = registration.parametric.then(|| element_for(member));

        let key = (name.clone(), element.clone());
        if let Some(bound) = self.bound.read().get(&key) {
            return Ok((bound.clone(), registration));
        }

        let bound = ImplementationRef {
            type_name: registration.type_name.clone(),
            element,
        };
        tracing::debug!(function = %name, implementation = %bound, "bound aggregate function");
        self.bound.write().insert(key, bound.clone());
        Ok((bound, registration))
    }
}

/// The element type a parametric implementation binds to for `member`.
fn element_for(member: &MemberMappingDescriptor) -> TypeRef {
    let target = &member.aggregate.target_type;
    match member.shape {
        MemberShape::Array => target
            .array_element()
            .cloned()
            .unwrap_or_else(|| target.clone()),
        MemberShape::List => target
            .generic_arg(0)
            .cloned()
            .unwrap_or_else(|| target.clone()),
        MemberShape::Scalar => target.clone(),
    }
}

/// Pick the generation strategy for a bound implementation.
///
/// Closed two-tier resolution: the full code-generation capability wins,
/// the basic capability is wrapped in the default strategy, anything else
/// is a configuration error naming the member.
pub fn resolve_generator(
    registration: &Registration,
    member: &MemberMappingDescriptor,
) -> ConfigResult<Arc<dyn AggregateCodeGenerator>> {
    if let Some(generator) = &registration.generator {
        return Ok(generator.clone());
    }
    if let Some(function) = &registration.function {
        return Ok(Arc::new(DefaultAggregateCodeGenerator::new(
            function.clone(),
        )));
    }
    Err(unsupported_implementation(
        &member.name,
        &member.aggregate.function_name,
    ))
}
