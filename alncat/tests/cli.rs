use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assert2::check;
use tempfile::TempDir;

const GREEK: [&str; 3] = [
    ">Alpha\nAAAAAAA\n>Beta\nBBBBBBB\n>Gamma\nGGGGGGG\n>Delta\nDDDDDDD\n>Epsilon\nEEEEEEE\n",
    ">Epsilon\n-EEEEEE\n>Alpha\n-AAAAAA\n>Beta\n-BBBBBB\n>Gamma\n-GGGGGG\n>Delta\n-DDDDDD\n",
    ">Delta\n--DDDDD\n>Epsilon\n--EEEEE\n>Alpha\n--AAAAA\n>Beta\n--BBBBB\n>Gamma\n--GGGGG\n",
];

fn write_inputs(dir: &Path, contents: &[&str], extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    contents
        .iter()
        .enumerate()
        .map(|(idx, content)| {
            let path = dir.join(format!("segment{idx}.{extension}"));
            fs::write(&path, content)?;
            Ok(path)
        })
        .collect()
}

fn alncat(args: &[&str], inputs: &[PathBuf]) -> anyhow::Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_alncat"))
        .args(inputs)
        .args(args)
        .output()?)
}

#[test]
fn test_positional_to_stdout() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let inputs = write_inputs(dir.path(), &GREEK, "fa")?;

    let output = alncat(&[], &inputs)?;
    check!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    check!(stdout.starts_with(">Alpha_Epsilon_Delta\nAAAAAAA-EEEEEE--DDDDD\n"));
    check!(stdout.lines().count() == 10);
    Ok(())
}

#[test]
fn test_sorted_with_linker_and_partitions() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let inputs = write_inputs(dir.path(), &GREEK, "fa")?;
    let out_path = dir.path().join("composite.fa");
    let partitions_path = dir.path().join("partitions.json");

    let output = alncat(
        &[
            "--sort",
            "--linker",
            "xx",
            "-o",
            out_path.to_str().unwrap(),
            "-p",
            partitions_path.to_str().unwrap(),
        ],
        &inputs,
    )?;
    check!(output.status.success());

    let composite = fs::read_to_string(&out_path)?;
    check!(composite.starts_with(">Alpha\nAAAAAAAxx-AAAAAAxx--AAAAA\n>Beta\n"));
    check!(composite.ends_with(">Gamma\nGGGGGGGxx-GGGGGGxx--GGGGG\n"));

    let partitions: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&partitions_path)?)?;
    check!(partitions[0]["start"] == 1);
    check!(partitions[0]["end"] == 7);
    check!(partitions[2]["start"] == 19);
    check!(partitions[2]["end"] == 25);
    check!(partitions[1]["source"] == inputs[1].to_str().unwrap());
    Ok(())
}

#[test]
fn test_stockholm_to_phylip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let inputs = write_inputs(
        dir.path(),
        &[
            "# STOCKHOLM 1.0\nhuman AC-G\nmouse ACCG\n//\n",
            "# STOCKHOLM 1.0\nmouse TT\nhuman T-\n//\n",
        ],
        "sto",
    )?;

    let output = alncat(&["-i", "stockholm", "-f", "phylip", "-s"], &inputs)?;
    check!(output.status.success());
    check!(String::from_utf8(output.stdout)? == "2 6\nhuman AC-GT-\nmouse ACCGTT\n");
    Ok(())
}

#[test]
fn test_shape_mismatch_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let inputs = write_inputs(dir.path(), &[GREEK[0], ">Alpha\nAAAA\n"], "fa")?;

    let output = alncat(&[], &inputs)?;
    check!(!output.status.success());
    check!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    check!(stderr.contains("segment1.fa"));
    check!(stderr.contains("has 1 records, expected 5"));
    Ok(())
}

#[test]
fn test_missing_identifier_fails_when_sorting() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let renamed = GREEK[2].replace("Beta", "Zeta");
    let inputs = write_inputs(dir.path(), &[GREEK[0], GREEK[1], renamed.as_str()], "fa")?;

    let output = alncat(&["-s"], &inputs)?;
    check!(!output.status.success());
    check!(String::from_utf8(output.stderr)?.contains("record name Beta occurs 0 times"));

    // positional matching ignores names
    check!(alncat(&[], &inputs)?.status.success());
    Ok(())
}

#[test]
fn test_failed_run_leaves_no_outputs() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let out_path = dir.path().join("composite.fa");
    let partitions_path = dir.path().join("partitions.json");
    let outputs = [
        "-o",
        out_path.to_str().unwrap(),
        "-p",
        partitions_path.to_str().unwrap(),
    ];

    let bad_inputs = write_inputs(dir.path(), &[GREEK[0], ">Alpha\nAAAA\n"], "fa")?;
    let output = alncat(&outputs, &bad_inputs)?;
    check!(!output.status.success());
    check!(!out_path.exists());
    check!(!partitions_path.exists());

    // a corrected re-run doesn't need -q
    let inputs = write_inputs(dir.path(), &GREEK, "fa")?;
    let output = alncat(&outputs, &inputs)?;
    check!(output.status.success());
    check!(fs::read_to_string(&out_path)?.starts_with(">Alpha_Epsilon_Delta\n"));
    check!(partitions_path.exists());
    Ok(())
}

#[test]
fn test_refuses_to_overwrite() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let inputs = write_inputs(dir.path(), &GREEK, "fa")?;
    let out_path = dir.path().join("composite.fa");
    fs::write(&out_path, "keep me")?;

    let output = alncat(&["-o", out_path.to_str().unwrap()], &inputs)?;
    check!(!output.status.success());
    check!(fs::read_to_string(&out_path)? == "keep me");

    let output = alncat(&["-q", "-o", out_path.to_str().unwrap()], &inputs)?;
    check!(output.status.success());
    check!(fs::read_to_string(&out_path)?.starts_with(">Alpha_Epsilon_Delta\n"));
    Ok(())
}

#[test]
fn test_write_only_input_format_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let inputs = write_inputs(dir.path(), &GREEK, "fa")?;

    let output = alncat(&["-i", "clustal"], &inputs)?;
    check!(!output.status.success());
    check!(output.stdout.is_empty());
    check!(String::from_utf8(output.stderr)?.contains("invalid value 'clustal'"));
    Ok(())
}
