use std::process::Command;

fn run_demo(path: &str) -> String {
    let binary = env!("CARGO_BIN_EXE_monty");
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let mut cmd = Command::new(binary);
    cmd.current_dir(manifest_dir).arg(path);

    let output = cmd.output().expect("failed to execute demo");
    assert!(
        output.status.success(),
        "demo {} exited with status {:?}",
        path,
        output.status
    );

    String::from_utf8(output.stdout).expect("stdout was not utf8")
}

#[test]
fn run_pall_demo() {
    let output = run_demo("demos/pall.m");
    assert_eq!(output, "3\n2\n1\n");
}

#[test]
fn run_arith_demo() {
    let output = run_demo("demos/arith.m");
    assert_eq!(output, "20\n");
}

#[test]
fn run_hello_demo() {
    let output = run_demo("demos/hello.m");
    assert_eq!(output, "Hello\n");
}

#[test]
fn run_char_codes_demo() {
    let output = run_demo("demos/char_codes.m");
    assert_eq!(output, "H\n72\n");
}

#[test]
fn run_swap_div_demo() {
    let output = run_demo("demos/swap_div.m");
    assert_eq!(output, "42\n");
}
