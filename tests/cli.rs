use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REPORT_FILE: &str = "SalesResults.txt";

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("compute_sales").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn without_elapsed_line(report: &str) -> String {
    report
        .lines()
        .filter(|line| !line.starts_with("Tiempo de Ejecución:"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn computes_total_and_writes_report() {
    let dir = TempDir::new().unwrap();
    write(&dir, "catalogue.json", r#"[{"title":"Widget","price":"9.99"}]"#);
    write(&dir, "sales.json", r#"[{"Product":"Widget","Quantity":3}]"#);

    cmd(&dir)
        .args(["catalogue.json", "sales.json"])
        .assert()
        .success()
        .stdout(contains("Costo Total: $29.97"))
        .stdout(contains("Errores encontrados: 0"));

    let report = fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
    assert!(report.starts_with(
        "Resultados de la Computación de Ventas\n-------------------------------------\n"
    ));
    assert!(report.contains("Costo Total: $29.97\n"));
    assert!(report.contains("Errores encontrados: 0\n"));
    assert!(report.ends_with(" segundos\n"));
}

#[test]
fn counts_rejected_sale_records() {
    let dir = TempDir::new().unwrap();
    write(&dir, "catalogue.json", r#"[{"title":"Widget","price":"9.99"}]"#);
    write(
        &dir,
        "sales.json",
        r#"[
            {"Product":"Widget","Quantity":1},
            {"Product":"Gadget","Quantity":2},
            {"Product":"Widget","Quantity":"abc"}
        ]"#,
    );

    cmd(&dir)
        .args(["catalogue.json", "sales.json"])
        .assert()
        .success()
        .stdout(contains("Producto 'Gadget' no encontrado en el catálogo."))
        .stdout(contains("Cantidad inválida para el producto 'Widget'."))
        .stdout(contains("Costo Total: $9.99"))
        .stdout(contains("Errores encontrados: 2"));
}

#[test]
fn prints_usage_for_a_single_argument() {
    let dir = TempDir::new().unwrap();
    write(&dir, "catalogue.json", "[]");

    cmd(&dir)
        .arg("catalogue.json")
        .assert()
        .code(1)
        .stdout(contains("Uso:"));

    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn prints_usage_for_too_many_arguments() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["a.json", "b.json", "c.json"])
        .assert()
        .code(1)
        .stdout(contains("Uso:"));

    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn prints_usage_instead_of_help_or_version() {
    let dir = TempDir::new().unwrap();

    for flag in ["--help", "-V"] {
        cmd(&dir)
            .arg(flag)
            .assert()
            .code(1)
            .stdout(contains("Uso:"));
    }

    assert!(!dir.path().join(REPORT_FILE).exists());
}

#[test]
fn accepts_paths_that_start_with_a_hyphen() {
    let dir = TempDir::new().unwrap();
    write(&dir, "-cat.json", r#"[{"title":"Widget","price":2}]"#);
    write(&dir, "sales.json", r#"[{"Product":"Widget","Quantity":3}]"#);

    cmd(&dir)
        .args(["-cat.json", "sales.json"])
        .assert()
        .success()
        .stdout(contains("Costo Total: $6.00"));
}

#[test]
fn still_succeeds_when_report_file_cannot_be_written() {
    let dir = TempDir::new().unwrap();
    write(&dir, "catalogue.json", r#"[{"title":"Widget","price":"9.99"}]"#);
    write(&dir, "sales.json", r#"[{"Product":"Widget","Quantity":3}]"#);
    // A directory in the way of the report file makes the write fail.
    fs::create_dir(dir.path().join(REPORT_FILE)).unwrap();

    cmd(&dir)
        .args(["catalogue.json", "sales.json"])
        .assert()
        .success()
        .stdout(contains("Costo Total: $29.97"))
        .stdout(contains("Error al escribir en SalesResults.txt"));

    assert!(dir.path().join(REPORT_FILE).is_dir());
}

#[test]
fn writes_plain_diagnostics_without_colour_codes() {
    let dir = TempDir::new().unwrap();
    write(&dir, "catalogue.json", r#"{"title":"Widget"}"#);
    write(&dir, "sales.json", r#"[{"Product":"Gadget","Quantity":1}]"#);

    let output = cmd(&dir)
        .args(["catalogue.json", "sales.json"])
        .assert()
        .success()
        .stdout(contains(
            "El catálogo no contiene 'title' o 'price' en el producto.",
        ))
        .get_output()
        .stdout
        .clone();

    assert!(!String::from_utf8_lossy(&output).contains('\u{1b}'));
}

#[test]
fn exits_with_error_when_catalogue_is_missing() {
    let dir = TempDir::new().unwrap();
    write(&dir, "sales.json", "[]");
    write(&dir, REPORT_FILE, "previous report");

    cmd(&dir)
        .args(["missing.json", "sales.json"])
        .assert()
        .code(1)
        .stdout(contains("Error al cargar el catálogo de precios. Saliendo."));

    // A failed run leaves an earlier report alone.
    assert_eq!(
        fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap(),
        "previous report"
    );
}

#[test]
fn exits_with_error_when_sales_are_malformed() {
    let dir = TempDir::new().unwrap();
    write(&dir, "catalogue.json", "[]");
    write(&dir, "sales.json", "[{\"Product\": ");

    cmd(&dir)
        .args(["catalogue.json", "sales.json"])
        .assert()
        .code(1)
        .stdout(contains("Error al leer sales.json"))
        .stdout(contains("Error al cargar el registro de ventas. Saliendo."));
}

#[test]
fn repeated_runs_produce_the_same_report() {
    let dir = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let catalogue = fs::read_to_string(fixtures.join("priceCatalogue.json")).unwrap();
    let sales = fs::read_to_string(fixtures.join("salesRecord.json")).unwrap();
    write(&dir, "catalogue.json", &catalogue);
    write(&dir, "sales.json", &sales);

    let mut reports = Vec::new();
    for _ in 0..2 {
        cmd(&dir)
            .args(["catalogue.json", "sales.json"])
            .assert()
            .success();
        reports.push(fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap());
    }

    assert_eq!(
        without_elapsed_line(&reports[0]),
        without_elapsed_line(&reports[1])
    );
    assert!(reports[0].contains("Errores encontrados: 2\n"));
}
