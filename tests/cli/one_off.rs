use crate::cli::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_one_off_database_page() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = setup_temp_dir()?;
    let server = mock_dbms().await;

    let mut cmd = console_command(&server, &temp_dir);
    cmd.arg("--one-off").arg("\\dbs; \\delete foo; \\l");
    let output = run_blocking(cmd, None).await?;

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "+----------+",
            "| database |",
            "+----------+",
            "| shop     |",
            "| foo      |",
            "+----------+",
            "deleted",
            "+----------+",
            "| database |",
            "+----------+",
            "| shop     |",
            "+----------+",
        ]
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_one_off_rows_and_failures() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = setup_temp_dir()?;
    let server = mock_dbms().await;

    let mut cmd = console_command(&server, &temp_dir);
    cmd.arg("--one-off").arg(
        "\\use shop; \\create items id inet; \\open orders; \\create 2, 'y'; \\l; \\save",
    );
    let output = run_blocking(cmd, None).await?;

    assert!(output.status.success());
    let lines = stdout_lines(&output);

    assert!(lines.contains(&"Error: syntax error".to_string()), "{lines:?}");
    assert!(
        lines.contains(&"Table row created successfully".to_string()),
        "{lines:?}"
    );
    assert!(lines.contains(&"| 2  | 2     | y      |".to_string()), "{lines:?}");
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Databases saved successfully")
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_base_url_exits() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = setup_temp_dir()?;
    let server = mock_dbms().await;

    let mut cmd = console_command(&server, &temp_dir);
    cmd.arg("--base-url")
        .arg("ftp://127.0.0.1")
        .arg("--one-off")
        .arg("\\dbs");
    let output = run_blocking(cmd, None).await?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("http or https"));

    Ok(())
}
