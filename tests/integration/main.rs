//! Integration tests for cmake-cache

mod coercion_tests {
    use cmake_cache::value::{coerce_bool, is_falsey, is_truthy};
    use cmake_cache::{CacheError, Scalar};

    #[test]
    fn truthy_table() {
        for raw in ["TRUE", "On", "yes", "Y", "1", "2"] {
            assert_eq!(coerce_bool(&Scalar::from(raw)), Ok(true), "{}", raw);
        }
    }

    #[test]
    fn falsey_table() {
        for raw in [
            "", "false", "Off", "no", "N", "ignore", "notfound", "anything-NOTFOUND", "0",
        ] {
            assert_eq!(coerce_bool(&Scalar::from(raw)), Ok(false), "{:?}", raw);
        }
    }

    #[test]
    fn neither_truthy_nor_falsey() {
        for value in [Scalar::from("maybe"), Scalar::Float(3.14)] {
            assert!(!is_truthy(&value));
            assert!(!is_falsey(&value));
            assert!(matches!(
                coerce_bool(&value),
                Err(CacheError::InvalidBoolean(_))
            ));
        }
    }
}

mod args_tests {
    use cmake_cache::{Cache, CacheEntry, Value, ValueType};
    use pretty_assertions::assert_eq;

    #[test]
    fn args_are_byte_exact() {
        let mut cache = Cache::new();
        cache.set("FOO", false).unwrap();
        cache.set("BAR", "Foo").unwrap();
        cache.set("BAZ", 42).unwrap();
        cache.set("QUX", ["A", "B", "C"]).unwrap();

        assert_eq!(
            cache.args(),
            ["-DFOO:BOOL=FALSE", "-DBAR=Foo", "-DBAZ=42", "-DQUX:STRING=A;B;C"]
        );
    }

    #[test]
    fn list_entries_get_string_type() {
        let mut cache = Cache::new();
        cache.set("X", [1, 2, 3]).unwrap();

        let entry = cache.get("X").unwrap();
        assert_eq!(entry.value_type(), Some(ValueType::String));
        assert_eq!(entry.value(), &Value::from([1, 2, 3]));
        assert_eq!(entry.to_string(), "X:STRING=1;2;3");
    }

    #[test]
    fn typed_bool_renders_uppercase() {
        let mut cache = Cache::new();
        cache.set_typed("X", false, ValueType::Bool).unwrap();

        assert_eq!(cache.get("X").unwrap().to_string(), "X:BOOL=FALSE");
        assert_eq!(cache.args(), ["-DX:BOOL=FALSE"]);
    }

    #[test]
    fn args_match_parsed_entries() {
        let mut cache = Cache::new();
        cache.set_typed("CMAKE_C_COMPILER", "/usr/bin/clang", ValueType::FilePath)
            .unwrap();
        cache.set("LLVM_ENABLE_ASSERTIONS", true).unwrap();

        for arg in cache.args() {
            let text = arg.strip_prefix("-D").unwrap();
            let entry: CacheEntry = text.parse().unwrap();
            assert_eq!(entry.to_string(), text);
        }
    }
}

mod container_tests {
    use cmake_cache::{Cache, CacheError};
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_after_set_is_as_if_never_set() {
        let mut cache = Cache::new();
        cache.set("X", 1).unwrap();
        cache.unset("X").unwrap();

        assert_eq!(cache.get("X"), None);
        assert_eq!(cache.unset("X"), Err(CacheError::EntryNotFound("X".to_string())));
        assert!(cache.is_empty());
    }

    #[test]
    fn merge_preserves_original_positions() {
        let mut base = Cache::new();
        base.set("A", 0).unwrap();
        base.set("B", 1).unwrap();
        base.set("C", 2).unwrap();

        let mut overrides = Cache::new();
        overrides.set("B", 99).unwrap();
        overrides.set("D", 3).unwrap();

        let merged = base.merge(&overrides);

        let names: Vec<_> = merged.entries().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
        assert_eq!(merged.get("B"), overrides.get("B"));
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let mut cache = Cache::new();
        cache.set("FOO", false).unwrap();
        cache.set("BAR", "Foo").unwrap();
        cache.set("BAZ", 42).unwrap();
        cache.set("QUX", ["A", "B", "C"]).unwrap();

        let json = serde_json::to_string_pretty(&cache).unwrap();
        let back: Cache = serde_json::from_str(&json).unwrap();

        assert_eq!(back, cache);
        assert_eq!(
            back.args(),
            ["-DFOO:BOOL=FALSE", "-DBAR=Foo", "-DBAZ=42", "-DQUX:STRING=A;B;C"]
        );
    }
}
