//! Scarab is a structured argumentation reasoner.
//!
//! Given a knowledge base made of strict and defeasible rules and a preference relation over the defeasible rules,
//! Scarab builds all the arguments of the knowledge base, computes the attacks between them (rebuttals and undercuts),
//! resolves the attacks into defeats using the weakest link principle,
//! and computes the grounded extension of the resulting framework to tell which literals are justified.
//!
//! The pipeline is made of the following stages:
//! * [`kb`]: literals, rules, preferences and validated rule bases;
//! * [`arguments`]: the construction of the arguments;
//! * [`framework`]: attacks and defeats;
//! * [`semantics`]: the grounded labelling and the status of literals;
//! * [`reasoner`]: the whole pipeline, its settings and its errors;
//! * [`io`]: readers and writers.

#![warn(missing_docs)]

pub mod arguments;

pub mod framework;

pub mod io;

pub mod kb;

pub mod reasoner;

pub mod semantics;
