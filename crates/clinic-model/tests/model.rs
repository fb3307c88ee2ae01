use clinic_model::{
    CanonicalField, CanonicalRecord, Delimiter, ImportError, RunSummary,
    is_placeholder_name, placeholder_name,
};

#[test]
fn record_serializes_non_empty_fields_by_key() {
    let record = CanonicalRecord::from_pairs([
        (CanonicalField::Nome, "Maria Silva"),
        (CanonicalField::Cpf, "123.456.789-09"),
    ]);
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, r#"{"nome":"Maria Silva","cpf":"123.456.789-09"}"#);
}

#[test]
fn field_serde_uses_machine_keys() {
    let json = serde_json::to_string(&CanonicalField::DataUltimaConsulta).unwrap();
    assert_eq!(json, "\"data_ultima_consulta\"");
    let back: CanonicalField = serde_json::from_str("\"responsavel_cpf\"").unwrap();
    assert_eq!(back, CanonicalField::ResponsavelCpf);
    for field in CanonicalField::ALL {
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, format!("\"{}\"", field.key()));
    }
}

#[test]
fn placeholder_names() {
    assert_eq!(placeholder_name(4), "__col_4");
    assert!(is_placeholder_name("__col_12"));
    assert!(!is_placeholder_name("__col_"));
    assert!(!is_placeholder_name("__col_x"));
    assert!(!is_placeholder_name("Nome"));
}

#[test]
fn delimiter_parsing() {
    assert_eq!("semicolon".parse::<Delimiter>().unwrap(), Delimiter::Semicolon);
    assert_eq!(";".parse::<Delimiter>().unwrap(), Delimiter::Semicolon);
    assert_eq!("TAB".parse::<Delimiter>().unwrap(), Delimiter::Tab);
    assert_eq!("\t".parse::<Delimiter>().unwrap(), Delimiter::Tab);
    assert_eq!(Delimiter::default(), Delimiter::Comma);
    assert_eq!(Delimiter::Tab.as_byte(), b'\t');
    assert!("pipe".parse::<Delimiter>().is_err());
}

#[test]
fn import_error_and_summary_serialize() {
    let err = ImportError::new(3, "{\"x\":\"\"}", "no recognizable fields", 300);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["line"], 3);
    assert_eq!(json["reason"], "no recognizable fields");

    let summary = RunSummary {
        delimiter: Delimiter::Semicolon,
        input_rows: 2,
        output_records: 1,
        merged_duplicates: 1,
        ..RunSummary::default()
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["delimiter"], "semicolon");
    assert_eq!(json["merged_duplicates"], 1);
}
