//! The built-in entity-resolution flag catalog.
//!
//! One declarative table below produces three views of the same information:
//!
//! * [`SzFlags`], the legacy constant table (name → `u64`) handed to the engine;
//! * [`catalog()`], the symbolic [`Catalog`] with usage groups and aggregates;
//! * [`names`] and [`groups`], `&'static str` symbols for call sites that look flags up.
//!
//! The catalog is built and checked on first access. A table that fails its own
//! invariants is a programming error, so the initializer panics rather than returning.

use crate::catalog::{Catalog, CatalogBuilder};
use crate::set::FlagSet;
use bitflags::Flags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;

macro_rules! flag_table {
    (
        groups { $($group:ident),* $(,)? }
        base { $($base:ident = $bit:literal in [$($base_group:ident),* $(,)?];)* }
        aggregate {
            $($aggregate:ident = [$($member:ident),* $(,)?] in [$($aggregate_group:ident),* $(,)?];)*
        }
    ) => {
        bitflags::bitflags! {
            /// Legacy constant view of the standard flags, including aggregates and aliases.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct SzFlags: u64 {
                $(const $base = 1 << $bit;)*
                $(const $aggregate = 0 $(| Self::$member.bits())*;)*
            }
        }

        /// Flag symbols of the standard catalog.
        pub mod names {
            $(pub const $base: &str = stringify!($base);)*
            $(pub const $aggregate: &str = stringify!($aggregate);)*
        }

        /// Usage group names of the standard catalog.
        pub mod groups {
            $(pub const $group: &str = stringify!($group);)*
        }

        /// Usage group names in declaration order.
        pub const STANDARD_GROUPS: &[&str] = &[$(stringify!($group)),*];

        /// The standard table as an unbuilt catalog, for callers that extend it.
        #[must_use]
        pub fn definitions() -> CatalogBuilder {
            let builder = Catalog::builder()$(.group(stringify!($group)))*;
            let builder = builder$(.base(
                stringify!($base),
                $bit,
                &[$(stringify!($base_group)),*],
            ))*;
            builder$(.aggregate(
                stringify!($aggregate),
                &[$(stringify!($member)),*],
                &[$(stringify!($aggregate_group)),*],
            ))*
        }
    };
}

flag_table! {
    groups {
        SZ_ADD_RECORD_FLAGS,
        SZ_DELETE_RECORD_FLAGS,
        SZ_REEVALUATE_RECORD_FLAGS,
        SZ_REEVALUATE_ENTITY_FLAGS,
        SZ_REDO_FLAGS,
        SZ_RECORD_FLAGS,
        SZ_RECORD_PREVIEW_FLAGS,
        SZ_ENTITY_FLAGS,
        SZ_EXPORT_FLAGS,
        SZ_FIND_PATH_FLAGS,
        SZ_FIND_NETWORK_FLAGS,
        SZ_FIND_INTERESTING_ENTITIES_FLAGS,
        SZ_SEARCH_FLAGS,
        SZ_WHY_RECORD_IN_ENTITY_FLAGS,
        SZ_WHY_RECORDS_FLAGS,
        SZ_WHY_ENTITIES_FLAGS,
        SZ_WHY_SEARCH_FLAGS,
        SZ_HOW_FLAGS,
        SZ_VIRTUAL_ENTITY_FLAGS,
    }
    base {
        SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES = 0 in [SZ_EXPORT_FLAGS];
        SZ_EXPORT_INCLUDE_POSSIBLY_SAME = 1 in [SZ_EXPORT_FLAGS];
        SZ_EXPORT_INCLUDE_POSSIBLY_RELATED = 2 in [SZ_EXPORT_FLAGS];
        SZ_EXPORT_INCLUDE_NAME_ONLY = 3 in [SZ_EXPORT_FLAGS];
        SZ_EXPORT_INCLUDE_DISCLOSED = 4 in [SZ_EXPORT_FLAGS];
        SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES = 5 in [SZ_EXPORT_FLAGS];
        SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS = 6 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS = 7 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS = 8 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS = 9 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_ALL_FEATURES = 10 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES = 11 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_ENTITY_NAME = 12 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_SUMMARY = 13 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_DATA = 14 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO = 15 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_JSON_DATA = 16 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
            SZ_RECORD_FLAGS,
            SZ_RECORD_PREVIEW_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_FEATURES = 18 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
            SZ_RECORD_FLAGS,
            SZ_RECORD_PREVIEW_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME = 19 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO = 20 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY = 21 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA = 22 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_INTERNAL_FEATURES = 23 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_FEATURE_STATS = 24 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_FIND_PATH_STRICT_AVOID = 25 in [SZ_FIND_PATH_FLAGS];
        SZ_INCLUDE_FEATURE_SCORES = 26 in [
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_HOW_FLAGS,
        ];
        SZ_SEARCH_INCLUDE_STATS = 27 in [SZ_SEARCH_FLAGS, SZ_WHY_SEARCH_FLAGS];
        SZ_ENTITY_INCLUDE_RECORD_TYPES = 28 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES = 29 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_FIND_PATH_INCLUDE_MATCHING_INFO = 30 in [SZ_FIND_PATH_FLAGS];
        SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA = 31 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
            SZ_RECORD_FLAGS,
            SZ_RECORD_PREVIEW_FLAGS,
        ];
        SZ_SEARCH_INCLUDE_ALL_CANDIDATES = 32 in [SZ_SEARCH_FLAGS, SZ_WHY_SEARCH_FLAGS];
        SZ_FIND_NETWORK_INCLUDE_MATCHING_INFO = 33 in [SZ_FIND_NETWORK_FLAGS];
        SZ_INCLUDE_MATCH_KEY_DETAILS = 34 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS = 35 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
            SZ_RECORD_FLAGS,
            SZ_RECORD_PREVIEW_FLAGS,
        ];
        SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS = 36 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
            SZ_RECORD_FLAGS,
            SZ_RECORD_PREVIEW_FLAGS,
        ];
        SZ_SEARCH_INCLUDE_REQUEST = 37 in [SZ_SEARCH_FLAGS, SZ_WHY_SEARCH_FLAGS];
        SZ_SEARCH_INCLUDE_REQUEST_DETAILS = 38 in [SZ_SEARCH_FLAGS, SZ_WHY_SEARCH_FLAGS];
        SZ_ENTITY_INCLUDE_RECORD_DATES = 39 in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
            SZ_RECORD_FLAGS,
        ];
        SZ_WITH_INFO = 62 in [
            SZ_ADD_RECORD_FLAGS,
            SZ_DELETE_RECORD_FLAGS,
            SZ_REEVALUATE_RECORD_FLAGS,
            SZ_REEVALUATE_ENTITY_FLAGS,
            SZ_REDO_FLAGS,
        ];
        SZ_SEARCH_INCLUDE_RESOLVED = 0 in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_INCLUDE_POSSIBLY_SAME = 1 in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_INCLUDE_POSSIBLY_RELATED = 2 in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_INCLUDE_NAME_ONLY = 3 in [SZ_SEARCH_FLAGS];
    }
    aggregate {
        SZ_NO_FLAGS = [] in [];
        SZ_EXPORT_INCLUDE_ALL_ENTITIES = [
            SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES,
            SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES,
        ] in [SZ_EXPORT_FLAGS];
        SZ_EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS = [
            SZ_EXPORT_INCLUDE_POSSIBLY_SAME,
            SZ_EXPORT_INCLUDE_POSSIBLY_RELATED,
            SZ_EXPORT_INCLUDE_NAME_ONLY,
            SZ_EXPORT_INCLUDE_DISCLOSED,
        ] in [SZ_EXPORT_FLAGS];
        SZ_ENTITY_INCLUDE_ALL_RELATIONS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
        ] in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
        ];
        SZ_SEARCH_INCLUDE_ALL_ENTITIES = [
            SZ_SEARCH_INCLUDE_RESOLVED,
            SZ_SEARCH_INCLUDE_POSSIBLY_SAME,
            SZ_SEARCH_INCLUDE_POSSIBLY_RELATED,
            SZ_SEARCH_INCLUDE_NAME_ONLY,
        ] in [SZ_SEARCH_FLAGS];
        SZ_ENTITY_CORE_FLAGS = [
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
        ] in [
            SZ_ENTITY_FLAGS,
            SZ_EXPORT_FLAGS,
            SZ_FIND_PATH_FLAGS,
            SZ_FIND_NETWORK_FLAGS,
            SZ_SEARCH_FLAGS,
            SZ_WHY_RECORD_IN_ENTITY_FLAGS,
            SZ_WHY_RECORDS_FLAGS,
            SZ_WHY_ENTITIES_FLAGS,
            SZ_WHY_SEARCH_FLAGS,
            SZ_VIRTUAL_ENTITY_FLAGS,
        ];
        SZ_RECORD_DEFAULT_FLAGS = [SZ_ENTITY_INCLUDE_RECORD_JSON_DATA] in [SZ_RECORD_FLAGS];
        SZ_RECORD_PREVIEW_DEFAULT_FLAGS = [
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
        ] in [SZ_RECORD_PREVIEW_FLAGS];
        SZ_ENTITY_DEFAULT_FLAGS = [
            SZ_ENTITY_CORE_FLAGS,
            SZ_ENTITY_INCLUDE_ALL_RELATIONS,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
        ] in [SZ_ENTITY_FLAGS];
        SZ_ENTITY_BRIEF_DEFAULT_FLAGS = [
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_ALL_RELATIONS,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
        ] in [SZ_ENTITY_FLAGS];
        SZ_EXPORT_DEFAULT_FLAGS = [
            SZ_EXPORT_INCLUDE_ALL_ENTITIES,
            SZ_ENTITY_DEFAULT_FLAGS,
        ] in [SZ_EXPORT_FLAGS];
        SZ_FIND_PATH_DEFAULT_FLAGS = [
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_FIND_PATH_INCLUDE_MATCHING_INFO,
        ] in [SZ_FIND_PATH_FLAGS];
        SZ_FIND_NETWORK_DEFAULT_FLAGS = [
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_FIND_NETWORK_INCLUDE_MATCHING_INFO,
        ] in [SZ_FIND_NETWORK_FLAGS];
        SZ_WHY_ENTITIES_DEFAULT_FLAGS = [SZ_INCLUDE_FEATURE_SCORES] in [SZ_WHY_ENTITIES_FLAGS];
        SZ_WHY_RECORDS_DEFAULT_FLAGS = [SZ_INCLUDE_FEATURE_SCORES] in [SZ_WHY_RECORDS_FLAGS];
        SZ_WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS = [
            SZ_INCLUDE_FEATURE_SCORES,
        ] in [SZ_WHY_RECORD_IN_ENTITY_FLAGS];
        SZ_WHY_SEARCH_DEFAULT_FLAGS = [
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_SEARCH_INCLUDE_REQUEST_DETAILS,
            SZ_SEARCH_INCLUDE_STATS,
        ] in [SZ_WHY_SEARCH_FLAGS];
        SZ_HOW_ENTITY_DEFAULT_FLAGS = [SZ_INCLUDE_FEATURE_SCORES] in [SZ_HOW_FLAGS];
        SZ_VIRTUAL_ENTITY_DEFAULT_FLAGS = [SZ_ENTITY_CORE_FLAGS] in [SZ_VIRTUAL_ENTITY_FLAGS];
        SZ_SEARCH_BY_ATTRIBUTES_ALL = [
            SZ_SEARCH_INCLUDE_ALL_ENTITIES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_INCLUDE_FEATURE_SCORES,
        ] in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_BY_ATTRIBUTES_STRONG = [
            SZ_SEARCH_INCLUDE_RESOLVED,
            SZ_SEARCH_INCLUDE_POSSIBLY_SAME,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_INCLUDE_FEATURE_SCORES,
        ] in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_ALL = [SZ_SEARCH_INCLUDE_ALL_ENTITIES] in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG = [
            SZ_SEARCH_INCLUDE_RESOLVED,
            SZ_SEARCH_INCLUDE_POSSIBLY_SAME,
        ] in [SZ_SEARCH_FLAGS];
        SZ_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS = [SZ_SEARCH_BY_ATTRIBUTES_ALL] in [SZ_SEARCH_FLAGS];
        SZ_ADD_RECORD_DEFAULT_FLAGS = [SZ_NO_FLAGS] in [SZ_ADD_RECORD_FLAGS];
        SZ_DELETE_RECORD_DEFAULT_FLAGS = [SZ_NO_FLAGS] in [SZ_DELETE_RECORD_FLAGS];
        SZ_REEVALUATE_RECORD_DEFAULT_FLAGS = [SZ_NO_FLAGS] in [SZ_REEVALUATE_RECORD_FLAGS];
        SZ_REEVALUATE_ENTITY_DEFAULT_FLAGS = [SZ_NO_FLAGS] in [SZ_REEVALUATE_ENTITY_FLAGS];
        SZ_REDO_DEFAULT_FLAGS = [SZ_NO_FLAGS] in [SZ_REDO_FLAGS];
        SZ_FIND_INTERESTING_ENTITIES_DEFAULT_FLAGS = [
            SZ_NO_FLAGS,
        ] in [SZ_FIND_INTERESTING_ENTITIES_FLAGS];
        SZ_ADD_RECORD_ALL_FLAGS = [SZ_WITH_INFO] in [SZ_ADD_RECORD_FLAGS];
        SZ_DELETE_RECORD_ALL_FLAGS = [SZ_WITH_INFO] in [SZ_DELETE_RECORD_FLAGS];
        SZ_REEVALUATE_RECORD_ALL_FLAGS = [SZ_WITH_INFO] in [SZ_REEVALUATE_RECORD_FLAGS];
        SZ_REEVALUATE_ENTITY_ALL_FLAGS = [SZ_WITH_INFO] in [SZ_REEVALUATE_ENTITY_FLAGS];
        SZ_REDO_ALL_FLAGS = [SZ_WITH_INFO] in [SZ_REDO_FLAGS];
        SZ_RECORD_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_RECORD_FLAGS];
        SZ_RECORD_PREVIEW_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
        ] in [SZ_RECORD_PREVIEW_FLAGS];
        SZ_ENTITY_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_ENTITY_FLAGS];
        SZ_EXPORT_ALL_FLAGS = [
            SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES,
            SZ_EXPORT_INCLUDE_POSSIBLY_SAME,
            SZ_EXPORT_INCLUDE_POSSIBLY_RELATED,
            SZ_EXPORT_INCLUDE_NAME_ONLY,
            SZ_EXPORT_INCLUDE_DISCLOSED,
            SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES,
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_EXPORT_FLAGS];
        SZ_FIND_PATH_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_FIND_PATH_STRICT_AVOID,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_FIND_PATH_INCLUDE_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_FIND_PATH_FLAGS];
        SZ_FIND_NETWORK_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_FIND_NETWORK_INCLUDE_MATCHING_INFO,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_FIND_NETWORK_FLAGS];
        SZ_FIND_INTERESTING_ENTITIES_ALL_FLAGS = [] in [SZ_FIND_INTERESTING_ENTITIES_FLAGS];
        SZ_SEARCH_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_SEARCH_INCLUDE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_SEARCH_INCLUDE_ALL_CANDIDATES,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_SEARCH_INCLUDE_REQUEST,
            SZ_SEARCH_INCLUDE_REQUEST_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
            SZ_SEARCH_INCLUDE_RESOLVED,
            SZ_SEARCH_INCLUDE_POSSIBLY_SAME,
            SZ_SEARCH_INCLUDE_POSSIBLY_RELATED,
            SZ_SEARCH_INCLUDE_NAME_ONLY,
        ] in [SZ_SEARCH_FLAGS];
        SZ_WHY_RECORD_IN_ENTITY_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_WHY_RECORD_IN_ENTITY_FLAGS];
        SZ_WHY_RECORDS_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_WHY_RECORDS_FLAGS];
        SZ_WHY_ENTITIES_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS,
            SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS,
            SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS,
            SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS,
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RELATED_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_WHY_ENTITIES_FLAGS];
        SZ_WHY_SEARCH_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_INCLUDE_FEATURE_SCORES,
            SZ_SEARCH_INCLUDE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_SEARCH_INCLUDE_ALL_CANDIDATES,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_SEARCH_INCLUDE_REQUEST,
            SZ_SEARCH_INCLUDE_REQUEST_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_WHY_SEARCH_FLAGS];
        SZ_HOW_ALL_FLAGS = [SZ_INCLUDE_FEATURE_SCORES] in [SZ_HOW_FLAGS];
        SZ_VIRTUAL_ENTITY_ALL_FLAGS = [
            SZ_ENTITY_INCLUDE_ALL_FEATURES,
            SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES,
            SZ_ENTITY_INCLUDE_ENTITY_NAME,
            SZ_ENTITY_INCLUDE_RECORD_SUMMARY,
            SZ_ENTITY_INCLUDE_RECORD_DATA,
            SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO,
            SZ_ENTITY_INCLUDE_RECORD_JSON_DATA,
            SZ_ENTITY_INCLUDE_RECORD_FEATURES,
            SZ_ENTITY_INCLUDE_INTERNAL_FEATURES,
            SZ_ENTITY_INCLUDE_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_TYPES,
            SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA,
            SZ_INCLUDE_MATCH_KEY_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_DETAILS,
            SZ_ENTITY_INCLUDE_RECORD_FEATURE_STATS,
            SZ_ENTITY_INCLUDE_RECORD_DATES,
        ] in [SZ_VIRTUAL_ENTITY_FLAGS];
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = definitions()
        .build()
        .unwrap_or_else(|err| panic!("standard flag catalog is inconsistent: {err}"));
    tracing::debug!(
        flags = catalog.flags().len(),
        groups = catalog.groups().len(),
        "Standard flag catalog built"
    );
    catalog
});

/// The standard catalog, built once per process.
///
/// # Panics
/// On first access, if the built-in table violates a catalog invariant.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Every legacy constant as `(name, value)`, in table order, aliases included.
pub fn legacy_constants() -> impl ExactSizeIterator<Item = (&'static str, u64)> + Clone {
    SzFlags::FLAGS.iter().map(|flag| (flag.name(), flag.value().bits()))
}

/// The legacy value of `name`, when the table declares it.
#[must_use]
pub fn legacy_value(name: &str) -> Option<u64> {
    SzFlags::FLAGS.iter().find(|flag| flag.name() == name).map(|flag| flag.value().bits())
}

impl From<&FlagSet<'_>> for SzFlags {
    fn from(set: &FlagSet<'_>) -> Self {
        Self::from_bits_retain(set.to_mask())
    }
}

impl From<u64> for SzFlags {
    fn from(bits: u64) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl Serialize for SzFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for SzFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u64::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
