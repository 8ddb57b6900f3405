// ABOUTME: Method registry mapping API method names to their validation and build rules
// ABOUTME: Built once per process from the static rule table and shared read-only afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Method Registry
//!
//! Each logical API method (`api-get-water`, `api-log-activity`, ...) is
//! described by a [`MethodRule`]: how the caller must authenticate, which
//! parameters fill the URL, which POST clauses apply, which parameters are
//! forwarded as headers, and the resource path template. Lookups are
//! case-insensitive and never fail loudly; an unknown name yields `None`.

/// Static rule table for every supported API method
mod methods;

use crate::constants::api::SELF_USER_MARKER;
use crate::models::{AuthRequirement, HttpVerb};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::info;

/// Parameter keys the URL of a method needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlParameterSpec {
    /// One URL shape; every key is required
    Flat(&'static [&'static str]),
    /// Mutually exclusive URL shapes in declaration order, `(variant, keys)`
    Variants(&'static [(&'static str, &'static [&'static str])]),
}

impl UrlParameterSpec {
    /// Keys required by `variant`, or the flat key set when `variant` is `None`
    #[must_use]
    pub fn keys(&self, variant: Option<&str>) -> Option<&'static [&'static str]> {
        match (*self, variant) {
            (Self::Flat(keys), None) => Some(keys),
            (Self::Variants(variants), Some(name)) => variants
                .iter()
                .find(|(variant_name, _)| *variant_name == name)
                .map(|(_, keys)| *keys),
            _ => None,
        }
    }

    /// Variant names in declaration order (empty for flat specs)
    pub fn variant_names(&self) -> impl Iterator<Item = &'static str> {
        let variants: &'static [(&'static str, &'static [&'static str])] = match *self {
            Self::Flat(_) => &[],
            Self::Variants(variants) => variants,
        };
        variants.iter().map(|(name, _)| *name)
    }
}

/// Resource path segments, literal or `<placeholder>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePathTemplate {
    /// Single path shape
    Flat(&'static [&'static str]),
    /// One path per URL variant, keyed like [`UrlParameterSpec::Variants`]
    Variants(&'static [(&'static str, &'static [&'static str])]),
}

impl ResourcePathTemplate {
    /// Raw segments for `variant` (ignored for flat templates)
    #[must_use]
    pub fn segments(&self, variant: Option<&str>) -> Option<&'static [&'static str]> {
        match *self {
            Self::Flat(segments) => Some(segments),
            Self::Variants(variants) => {
                let name = variant?;
                variants
                    .iter()
                    .find(|(variant_name, _)| *variant_name == name)
                    .map(|(_, segments)| *segments)
            }
        }
    }

    /// Every segment across all shapes
    pub fn all_segments(&self) -> impl Iterator<Item = &'static str> {
        let shapes: Vec<&'static [&'static str]> = match *self {
            Self::Flat(segments) => vec![segments],
            Self::Variants(variants) => variants.iter().map(|(_, segments)| *segments).collect(),
        };
        shapes.into_iter().flat_map(|segments| segments.iter().copied())
    }

    /// Placeholder keys across all shapes, in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.all_segments()
            .filter_map(|segment| PathSegment::parse(segment).placeholder())
    }

    /// Whether any shape embeds `<key>`
    #[must_use]
    pub fn has_placeholder(&self, key: &str) -> bool {
        self.placeholders().any(|placeholder| placeholder == key)
    }

    /// Whether any shape contains the authenticated-user marker
    #[must_use]
    pub fn has_self_reference(&self) -> bool {
        self.all_segments().any(|segment| segment == SELF_USER_MARKER)
    }
}

/// Classified resource path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Emitted verbatim
    Literal(&'a str),
    /// Replaced by the parameter of the same name
    Placeholder(&'a str),
    /// The authenticated user (`-`)
    SelfReference,
}

impl<'a> PathSegment<'a> {
    /// Classify a raw template segment
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        if raw == SELF_USER_MARKER {
            return Self::SelfReference;
        }
        raw.strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .map_or(Self::Literal(raw), Self::Placeholder)
    }

    /// Placeholder key, if this is a placeholder
    #[must_use]
    pub const fn placeholder(self) -> Option<&'a str> {
        match self {
            Self::Placeholder(key) => Some(key),
            Self::Literal(_) | Self::SelfReference => None,
        }
    }
}

/// Clauses constraining the parameters of a POST method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostParameterSpec {
    /// All must be present
    pub required: &'static [&'static str],
    /// Exactly one must be present (ignored when empty)
    pub exclusive: &'static [&'static str],
    /// At least one must be present (ignored when empty)
    pub one_required: &'static [&'static str],
    /// `(trigger, dependency)`: the trigger requires the dependency
    pub required_if: &'static [(&'static str, &'static str)],
}

/// Validation and build rules for one API method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodRule {
    /// Canonical lower-case method name
    pub name: &'static str,
    /// Authentication the method demands
    pub auth: AuthRequirement,
    /// HTTP verb
    pub verb: HttpVerb,
    /// Keys that fill the resource path
    pub url_params: UrlParameterSpec,
    /// POST clauses, if any
    pub post_params: Option<PostParameterSpec>,
    /// Parameter names forwarded as HTTP headers
    pub request_headers: &'static [&'static str],
    /// Resource path relative to the version prefix
    pub resource_path: ResourcePathTemplate,
}

/// Global registry shared by every client in the process
static GLOBAL_REGISTRY: OnceLock<MethodRegistry> = OnceLock::new();

/// Lookup table from method name to rule
#[derive(Debug)]
pub struct MethodRegistry {
    rules: HashMap<&'static str, &'static MethodRule>,
}

impl MethodRegistry {
    /// Build a registry from the static rule table
    #[must_use]
    pub fn new() -> Self {
        let rules: HashMap<_, _> = methods::METHOD_RULES
            .iter()
            .map(|rule| (rule.name, rule))
            .collect();

        info!("Method registry initialized with {} API method(s)", rules.len());

        Self { rules }
    }

    /// Process-wide registry, built on first use
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::new)
    }

    /// Case-insensitive rule lookup
    #[must_use]
    pub fn lookup(&self, method: &str) -> Option<&'static MethodRule> {
        self.rules.get(method.to_lowercase().as_str()).copied()
    }

    /// All method names, sorted
    #[must_use]
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Every rule in the registry, sorted by name
    pub fn rules(&self) -> impl Iterator<Item = &'static MethodRule> {
        let mut rules: Vec<_> = self.rules.values().copied().collect();
        rules.sort_unstable_by_key(|rule| rule.name);
        rules.into_iter()
    }

    /// Number of registered methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}
