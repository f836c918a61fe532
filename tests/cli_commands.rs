mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn generate_prints_credentials_script() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--auth", "Credentials", "-r", "AADUser"])
        .args(["--origin", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Generated by Microsoft365DSC from https://example.com on ",
        ))
        .stdout(predicate::str::contains("$creds = Get-Credential\n"))
        .stdout(predicate::str::contains(
            "Export-M365DSCConfiguration -Quiet -ComponentsToExtract @(\"AADUser\") -GlobalAdminAccount $creds",
        ));
}

#[test]
fn generate_alias_with_application_mode_and_no_resources() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["g", "-a", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$ApplicationSecret = Read-Host -Prompt 'Application Secret'",
        ))
        .stdout(predicate::str::contains(
            "@(\"\") -ApplicationId $ApplicationId -ApplicationSecret $ApplicationSecret -TenantId $TenantId",
        ));
}

#[test]
fn generate_certificate_script_from_selection_file() {
    let ctx = TestContext::new();
    ctx.write_file(
        "selection.yml",
        "- name: AADUser\n  checked: true\n- name: AADApplication\n  checked: false\n- AADGroup\n",
    );

    ctx.cli()
        .args(["generate", "--auth", "Certificate", "--selection", "selection.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@(\"AADUser\", \"AADGroup\")"))
        .stdout(predicate::str::contains("AADApplication").not())
        .stdout(predicate::str::contains(
            "-ApplicationId $ApplicationId -CertificateThumbprint $CertificateThumbprint -TenantId $TenantId",
        ));
}

#[test]
fn generate_writes_output_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-a", "cert", "-r", "EXOMailbox", "-o", "export.ps1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Certificate export script for 1 resource(s)"));

    let script = ctx.read_file("export.ps1");
    assert!(script.starts_with("# Generated by Microsoft365DSC from http://localhost on "));
    assert!(script.contains("@(\"EXOMailbox\")"));
    assert!(!script.ends_with('\n'));
}

#[test]
fn generate_uses_config_defaults() {
    let ctx = TestContext::new();
    ctx.write_file(
        "exportgen.toml",
        "[script]\norigin = \"https://export.contoso.com/panel\"\nauthentication = \"Application\"\n\n\
         [resources]\nselected = [\"SPOSite\"]\n",
    );

    ctx.cli()
        .args(["generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from https://export.contoso.com on "))
        .stdout(predicate::str::contains("@(\"SPOSite\") -ApplicationId $ApplicationId"));
}

#[test]
fn generate_unrecognized_mode_renders_stub_and_warns() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--auth", "Kerberos", "-r", "AADUser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read-Host").not())
        .stdout(predicate::str::contains("Get-Credential").not())
        .stdout(predicate::str::contains("-ComponentsToExtract @(\"AADUser\")\n"))
        .stderr(predicate::str::contains("unrecognized authentication mode"));
}

#[test]
fn generate_strict_rejects_unrecognized_mode() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--auth", "Kerberos", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown authentication mode 'Kerberos'"));
}

#[test]
fn generate_rejects_invalid_origin() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--origin", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid origin 'example.com'"));
}

#[test]
fn generate_reports_missing_selection_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--selection", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selection file not found"));
}

#[test]
fn generate_reports_missing_explicit_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--config", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn modes_lists_all_authentication_modes() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["modes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials"))
        .stdout(predicate::str::contains("Application"))
        .stdout(predicate::str::contains("Certificate - Application Id + Certificate Thumbprint"));
}
