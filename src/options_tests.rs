#[cfg(test)]
mod tests {
    use crate::options::{
        Logging, QueryOptions, TransactionHandle, add_options, add_to_fields, in_fields,
        value_filtered_by_fields,
    };
    use crate::value::DataValue;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct Tx(&'static str);

    impl TransactionHandle for Tx {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn in_fields_without_restriction() {
        assert!(in_fields("x", &QueryOptions::new()));
    }

    #[test]
    fn in_fields_with_restriction() {
        assert!(!in_fields("x", &QueryOptions::new().with_fields(["y"])));
        assert!(in_fields("x", &QueryOptions::new().with_fields(["x", "y"])));
        assert!(!in_fields("x", &QueryOptions::new().with_fields(Vec::<String>::new())));
    }

    #[test]
    fn value_filtered_by_fields_cases() {
        let item: HashMap<String, DataValue> = HashMap::from([
            ("name".to_string(), DataValue::from("task")),
            ("parentId".to_string(), DataValue::from(3_i64)),
        ]);

        let all = QueryOptions::new();
        assert_eq!(
            value_filtered_by_fields("parentId", &item, &all),
            Some(DataValue::I64(3))
        );
        assert_eq!(
            value_filtered_by_fields("missing", &item, &all),
            Some(DataValue::Null)
        );

        let only_name = QueryOptions::new().with_fields(["name"]);
        assert_eq!(
            value_filtered_by_fields("name", &item, &only_name),
            Some(DataValue::from("task"))
        );
        assert_eq!(value_filtered_by_fields("parentId", &item, &only_name), None);
    }

    #[test]
    fn add_to_fields_appends_copy() {
        let mut options = QueryOptions::new().with_fields(["name"]);
        let original = options.fields.clone().unwrap();

        add_to_fields("parentId", &mut options);

        assert_eq!(options.fields(), Some(&["name".to_string(), "parentId".to_string()][..]));
        assert_eq!(&original[..], &["name".to_string()][..]);
        assert!(!Arc::ptr_eq(&original, options.fields.as_ref().unwrap()));
    }

    #[test]
    fn add_to_fields_noop_when_present_or_unrestricted() {
        let mut options = QueryOptions::new().with_fields(["name"]);
        let original = options.fields.clone().unwrap();
        add_to_fields("name", &mut options);
        assert!(Arc::ptr_eq(&original, options.fields.as_ref().unwrap()));

        let mut open = QueryOptions::new();
        add_to_fields("name", &mut open);
        assert!(open.fields.is_none());
    }

    #[test]
    fn add_to_fields_does_not_affect_shared_options() {
        let shared = QueryOptions::new().with_fields(["a"]);
        let mut local = shared.clone();
        add_to_fields("b", &mut local);

        assert_eq!(shared.fields(), Some(&["a".to_string()][..]));
        assert_eq!(local.fields().map(<[String]>::len), Some(2));
    }

    #[test]
    fn add_options_copies_execution_settings() {
        let source = QueryOptions::new()
            .with_transaction(Tx("t1"))
            .with_logging(Logging::Disabled)
            .with_search_path("app, public")
            .with_fields(["ignored"]);
        let mut target = QueryOptions::new()
            .with_search_path("old")
            .with_fields(["kept"]);

        let out = add_options(&mut target, &source);
        assert_eq!(out.transaction.as_ref().map(|t| t.id()), Some("t1"));
        assert!(matches!(out.logging, Logging::Disabled));
        assert_eq!(out.search_path.as_deref(), Some("app, public"));
        assert_eq!(out.fields(), Some(&["kept".to_string()][..]));
    }

    #[test]
    fn add_options_overwrites_with_empty_values() {
        let mut target = QueryOptions::new()
            .with_transaction(Tx("t1"))
            .with_search_path("app");
        add_options(&mut target, &QueryOptions::new());

        assert!(target.transaction.is_none());
        assert!(target.search_path.is_none());
        assert!(matches!(target.logging, Logging::Inherit));
    }

    #[test]
    fn add_options_shares_custom_logging_without_calling_it() {
        let calls = Arc::new(Mutex::new(0_usize));
        let counter = calls.clone();
        let source = QueryOptions::new().with_logging(Logging::custom(move |_sql| {
            *counter.lock().unwrap() += 1;
        }));
        let mut target = QueryOptions::new().with_logging(Logging::Disabled);

        add_options(&mut target, &source);

        let copied = target.logging.func().unwrap();
        assert!(Arc::ptr_eq(copied, source.logging.func().unwrap()));
        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(Logging::Disabled.func().is_none());
        assert_eq!(format!("{:?}", target.logging), "Custom(<fn>)");
    }
}
