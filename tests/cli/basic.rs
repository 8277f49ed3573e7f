use crate::cli::*;

// Seems like we can't read from stdout until we close stdin, at which point we can no longer
// enter any commands.
// Consequently, the test is structured such that we first issue all the commands and only then
// do we assert on the output.
#[tokio::test(flavor = "multi_thread")]
async fn test_cli_basic() -> std::io::Result<()> {
    let temp_dir = setup_temp_dir()?;
    let server = mock_dbms().await;

    let mut input = String::new();
    let mut expected_stdout: Vec<&str> = vec![];
    let mut expected_stderr: Vec<&str> = vec![];

    // The database page is loaded on start
    expected_stdout.push("| shop     |");

    // Move down to a table
    input.push_str("\\use shop\n");
    expected_stdout.push("| orders |");
    input.push_str("\\open orders\n");
    expected_stdout.push("| id | a:int | b:text |");
    expected_stdout.push("| 1  | 1     | x      |");

    // Append a row
    input.push_str("\\create 2, 'y'\n");
    expected_stdout.push("Table row created successfully");

    // Not commands
    input.push_str("SELECT 1\n");
    expected_stderr.push("'SELECT 1' is not a valid command");
    input.push_str("\\frobnicate\n");
    expected_stderr.push("'\\frobnicate' is not a valid command");

    // Render the page
    input.push_str("\\html\n");
    expected_stdout.push(r#"<tr id="row-2"><td>2</td><td>2</td><td>y</td></tr>"#);

    input.push_str("\\q\n");

    let cmd = console_command(&server, &temp_dir);
    let output = run_blocking(cmd, Some(input)).await?;

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in expected_stdout {
        assert!(stdout.contains(expected), "{expected:?} not in {stdout}");
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    for expected in expected_stderr {
        assert!(stderr.contains(expected), "{expected:?} not in {stderr}");
    }

    // History is written on the way out
    assert!(temp_dir.path().join(".history").exists());

    Ok(())
}
