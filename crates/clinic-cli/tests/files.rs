//! Template reading and output writing against real files.

use std::fs;

use clinic_cli::output::{default_output_paths, write_errors, write_records};
use clinic_cli::template::read_template_header;
use clinic_core::Reconciler;
use clinic_model::Delimiter;
use tempfile::TempDir;

#[test]
fn text_template_header_is_split_on_its_own_delimiter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("modelo.csv");
    fs::write(&path, "\u{feff}\nPaciente;CPF;;\"Telefone; celular\"\n1;2;3;4\n").unwrap();

    let cells = read_template_header(&path).unwrap();
    assert_eq!(cells, vec!["Paciente", "CPF", "", "Telefone; celular"]);
}

#[test]
fn windows_1252_template_is_decoded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("modelo.txt");
    // "Endereço,Número" with ç = 0xE7 and ú = 0xFA.
    let mut bytes = b"Endere".to_vec();
    bytes.extend([0xE7, b'o', b',', b'N', 0xFA, b'm', b'e', b'r', b'o', b'\n']);
    fs::write(&path, bytes).unwrap();

    let cells = read_template_header(&path).unwrap();
    assert_eq!(cells, vec!["Endereço", "Número"]);
}

#[test]
fn unreadable_templates_are_errors() {
    let dir = TempDir::new().unwrap();
    assert!(read_template_header(&dir.path().join("ausente.csv")).is_err());

    let fake = dir.path().join("modelo.xlsx");
    fs::write(&fake, "not a workbook").unwrap();
    assert!(read_template_header(&fake).is_err());
}

#[test]
fn records_and_errors_round_trip_through_csv() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pacientes.csv");
    let (records_path, errors_path) = default_output_paths(&input);

    let output = Reconciler::default()
        .reconcile(
            "Nome;CPF;;Obs\n\
             Ana;12345678909;;\"linha 1\nlinha 2\"\n\
             ;;órfão;\n",
        )
        .unwrap();
    write_records(&records_path, &output, Delimiter::Semicolon).unwrap();
    write_errors(&errors_path, &output.errors, Delimiter::Comma).unwrap();

    let records = fs::read_to_string(&records_path).unwrap();
    let mut lines = records.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Nome;Nome social;Apelido;Sexo;CPF;"));
    assert!(header.ends_with(";Observações;Campos extras"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("Ana;;;;123.456.789-09;"));
    assert!(row.ends_with(";linha 1 linha 2;"));

    let errors = fs::read_to_string(&errors_path).unwrap();
    insta::assert_snapshot!(errors, @r"
    line,raw,reason
    3,;;órfão;,linha sem campos reconhecíveis após o mapeamento
    ");
}

#[test]
fn output_directories_are_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saida").join("importacao.csv");
    let output = Reconciler::default().reconcile("Nome\nAna\n").unwrap();
    write_records(&path, &output, Delimiter::Tab).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Nome\tNome social\t"));
}
