/*!
A library for reasoning under uncertainty using Dempster-Shafer belief-function theory.

dempster_shafer represents *mass functions* over a finite frame of discernment and provides
the algebraic and decision-theoretic toolkit built on them: credibility, plausibility,
commonality, pignistic probability; discounting, weakening, conditioning; combination rules
(Dempster, Smets, disjunctive, Yager, Dubois-Prade, average, Murphy, Chen); distance,
similarity, and support; and decision support extracting maxima/minima of these criteria
under cardinality constraints.

# Orientation

The library is designed around three tightly coupled concerns:

- The [element algebra](structures), a compact representation of subsets of a finite frame
  of discernment as bit-packed vectors ([`DiscreteElement`](structures::discrete::DiscreteElement))
  or finite unions of real intervals ([`IntervalElement`](structures::interval::IntervalElement)),
  with constant- or near-constant-time conjunction, disjunction, opposite, and cardinality.
- The [mass-function engine](mass), the focal-set data structure with canonical
  add/remove/clean/normalise semantics, and every decision-support, discounting,
  conditioning, and combination rule built generically over the element algebra.
- The [element enumerator and power-set generators](sets), used by decision support and by
  the Dubois-Prade combination rule, which avoid materialising 2^n structures where the
  algorithm does not require them.

Useful starting points:
- [`structures::discrete::DiscreteElement`] and [`structures::interval::IntervalElement`] for
  the two element representations.
- [`mass::MassFunction`] for the focal-set engine, its decision criteria, and its combination
  rules.
- [`sets::powerset`] for the power-set generators used by decision support.
- [`config::Config`] for the one numerical tunable the core exposes.

# Guiding principles

## Modularity

Element algebra is factored into a capability described by the [`structures::Element`] trait,
and [`MassFunction`](mass::MassFunction) is generic over any type implementing it. This keeps
the combination rules' inner loops monomorphised rather than going through a vtable, since
those loops are performance-critical on the product of two focal sets.

## No silent fix-ups

Operations which would require guessing at caller intent (conditioning on an empty element,
combining over incompatible frames, normalising an empty focal set) return errors rather than
producing a best-effort result. See [`types::err`] for the full error taxonomy.

## Out of scope

This crate is deliberately silent on: sensor/temporal belief-construction front-ends, mapping
belief between frames, serialization to disk or XML, and textual formatting for humans. Those
are external collaborators built on top of this crate's [`mass::MassFunction::add_mass`],
[`mass::MassFunction::conditioning`], [`mass::MassFunction::discounting`], the
`combination_*` family, and [`mass::MassFunction::vacuous`].

# Logs

Calls to [log!](log) mark combination-rule dispatch, focal-set cleaning, and the exponential
decision-support fallback described in [`mass::MassFunction::get_max`]. No log implementation
is bundled; see [misc::log] for the target names used.
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod types;

pub mod misc;

pub mod structures;

pub mod sets;

pub mod mass;
