//! Property-based tests for identifier generation and override merging.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use fleet_launcher::application::services::compiler::add_collector_parameters;
use fleet_launcher::domain::flow_id::{encode_flow_id, FLOW_ID_CODE_LEN, FLOW_PREFIX};
use fleet_launcher::domain::request::{CollectorRequest, CompiledProgram, EnvPair};

// ============================================================================
// Flow id properties
// ============================================================================

proptest! {
    /// Every encoded id has the fixed prefix, fixed width and base32-hex
    /// alphabet, whatever the timestamp and random suffix.
    #[test]
    fn prop_flow_id_format(secs in proptest::num::u32::ANY, random in proptest::array::uniform4(proptest::num::u8::ANY)) {
        let id = encode_flow_id(secs, random);
        prop_assert!(id.starts_with(FLOW_PREFIX), "missing prefix: {id}");
        prop_assert_eq!(id.len(), FLOW_PREFIX.len() + FLOW_ID_CODE_LEN);
        let code = &id[FLOW_PREFIX.len()..];
        prop_assert!(
            code.chars().all(|c| c.is_ascii_digit() || ('A'..='V').contains(&c)),
            "non-base32hex chars: {}", code
        );
    }

    /// Ids are time-ordered: a strictly later timestamp always sorts after
    /// an earlier one, regardless of either random suffix.
    #[test]
    fn prop_flow_ids_sort_by_timestamp(
        earlier in 0u32..u32::MAX,
        gap in 1u32..1000,
        r1 in proptest::array::uniform4(proptest::num::u8::ANY),
        r2 in proptest::array::uniform4(proptest::num::u8::ANY),
    ) {
        let later = earlier.saturating_add(gap);
        prop_assume!(later > earlier);
        prop_assert!(encode_flow_id(earlier, r1) < encode_flow_id(later, r2));
    }
}

// ============================================================================
// Override merge properties
// ============================================================================

fn env_keys(program: &CompiledProgram) -> BTreeSet<String> {
    program.env.iter().map(|e| e.key.clone()).collect()
}

proptest! {
    /// Overrides never introduce environment keys the program does not
    /// already declare, whatever the caller sends.
    #[test]
    fn prop_overrides_never_grow_env_key_set(
        declared in proptest::collection::vec(("[A-Za-z]{1,8}", "[a-z0-9]{0,8}"), 0..8),
        overrides in proptest::collection::vec(("[A-Za-z]{1,8}", "[a-z0-9]{0,8}"), 0..8),
    ) {
        let mut program = CompiledProgram::default();
        for (key, value) in &declared {
            program.push_env(key.clone(), value.clone());
        }
        let before = env_keys(&program);

        let request = CollectorRequest {
            parameters: overrides
                .iter()
                .map(|(k, v)| EnvPair::new(k.clone(), v.clone()))
                .collect(),
            ..CollectorRequest::default()
        };
        add_collector_parameters(&mut program, &request);

        prop_assert_eq!(env_keys(&program), before);
    }

    /// Applying the same override set twice yields the same environment as
    /// applying it once.
    #[test]
    fn prop_override_merge_is_idempotent(
        declared in proptest::collection::vec(("[A-Za-z]{1,8}", "[a-z0-9]{0,8}"), 0..8),
        overrides in proptest::collection::vec(("[A-Za-z]{1,8}", "[a-z0-9]{0,8}"), 0..8),
    ) {
        let mut program = CompiledProgram::default();
        for (key, value) in &declared {
            program.push_env(key.clone(), value.clone());
        }
        let request = CollectorRequest {
            parameters: overrides
                .iter()
                .map(|(k, v)| EnvPair::new(k.clone(), v.clone()))
                .collect(),
            ..CollectorRequest::default()
        };

        add_collector_parameters(&mut program, &request);
        let once = program.env.clone();
        add_collector_parameters(&mut program, &request);

        prop_assert_eq!(program.env, once);
    }
}
