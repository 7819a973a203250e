use exercise_analyzer::error::{AnalyzerError, ConfigError, FileError};
use exercise_analyzer::models::templates;
use exercise_analyzer::{
    analyze, Analyzer, AnalyzerRegistry, AppError, Config, Options, Submission, SubmissionFlow,
    Verdict,
};
use serde_json::{json, Value as JsonValue};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const EXERCISE_CONFIG: &str = r#"{
  "two-fer": {"codeFile": "two_fer.ex", "analyzerReference": "ElixirAnalyzer.ExerciseTest.TwoFer"},
  "hello-world": {"codeFile": "hello_world.ex", "analyzerReference": "HelloWorld"},
  "retired": {"codeFile": "retired.ex", "analyzerReference": "ElixirAnalyzer.ExerciseTest.Retired"}
}"#;

const TWO_FER: &str = r#"defmodule TwoFer do
  @moduledoc false
  def two_fer(name \\ "you") when is_binary(name), do: "One for #{name}, one for me"
end
"#;

/// 批准且不留评语的测试分析器
struct AlwaysApprove;

impl Analyzer for AlwaysApprove {
    fn name(&self) -> &str {
        "AlwaysApprove"
    }

    fn analyze(&self, submission: &mut Submission, _code: &str) -> Result<(), AnalyzerError> {
        submission.approve();
        Ok(())
    }
}

/// 总是报错的测试分析器
struct Broken;

impl Analyzer for Broken {
    fn name(&self) -> &str {
        "Broken"
    }

    fn analyze(&self, _submission: &mut Submission, _code: &str) -> Result<(), AnalyzerError> {
        Err(AnalyzerError::failed("Broken", "rule table missing"))
    }
}

/// 发现结构问题后中止并判为不通过的测试分析器
struct HaltsOnDebugOutput;

impl Analyzer for HaltsOnDebugOutput {
    fn name(&self) -> &str {
        "HaltsOnDebugOutput"
    }

    fn analyze(&self, submission: &mut Submission, code: &str) -> Result<(), AnalyzerError> {
        if code.contains("IO.inspect") {
            submission.halt();
            submission.disapprove();
        } else {
            submission.approve();
        }
        Ok(())
    }
}

/// 测试环境：练习配置 + 提交目录 + 输出目录
struct Fixture {
    root: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("exercises.json"), EXERCISE_CONFIG).unwrap();
        fs::create_dir_all(root.path().join("out")).unwrap();
        Self { root }
    }

    fn submission_dir(&self, name: &str) -> String {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir.to_string_lossy().to_string()
    }

    fn add_source(&self, submission: &str, file: &str, code: &str) {
        let lib = self.root.path().join(submission).join("lib");
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join(file), code).unwrap();
    }

    fn out_dir(&self) -> String {
        self.root.path().join("out").to_string_lossy().to_string()
    }

    fn options(&self, extra: JsonValue) -> Options {
        let mut options: Options = extra.as_object().cloned().unwrap_or_default();
        options
            .entry("exerciseConfigPath")
            .or_insert_with(|| json!(self.root.path().join("exercises.json").to_string_lossy()));
        options.entry("putsSummary").or_insert(json!(false));
        options
    }

    fn written_report(&self) -> JsonValue {
        let text = fs::read_to_string(Path::new(&self.out_dir()).join("analysis.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

fn flow_with(name: &str, analyzer: Arc<dyn Analyzer>) -> SubmissionFlow {
    let config = Config::default();
    let mut registry = AnalyzerRegistry::new(config.module_namespace.clone());
    registry.register(name, analyzer);
    SubmissionFlow::new(config, registry)
}

fn default_flow() -> SubmissionFlow {
    let config = Config::default();
    let registry = AnalyzerRegistry::new(config.module_namespace.clone());
    SubmissionFlow::new(config, registry)
}

#[test]
fn test_approving_analyzer_writes_approve_report() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub1");
    fixture.add_source("sub1", "two_fer.ex", TWO_FER);

    let submission = flow_with("TwoFer", Arc::new(AlwaysApprove))
        .run("two-fer", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    assert!(submission.is_analyzed());
    assert_eq!(submission.to_json().unwrap(), r#"{"status":"approve","comments":[]}"#);
    assert_eq!(fixture.written_report(), json!({"status": "approve", "comments": []}));
}

#[test]
fn test_missing_code_file_is_referred_with_one_comment() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub2");

    let submission = default_flow()
        .run("two-fer", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    assert!(submission.is_halted());
    assert!(!submission.is_analyzed());
    assert_eq!(
        fixture.written_report(),
        json!({
            "status": "refer",
            "comments": [{
                "comment": templates::GENERAL_FILE_NOT_FOUND,
                "params": {"file_name": "two_fer.ex", "path": path}
            }]
        })
    );
}

#[test]
fn test_unknown_exercise_writes_bare_disapprove() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub3");

    let submission = default_flow()
        .run("does-not-exist", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    assert_eq!(submission.verdict(), Verdict::Disapprove);
    let text = fs::read_to_string(Path::new(&fixture.out_dir()).join("analysis.json")).unwrap();
    assert_eq!(text, r#"{"status":"disapprove","comments":[]}"#);
}

#[test]
fn test_unregistered_analyzer_is_contained() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub4");
    fixture.add_source("sub4", "retired.ex", "defmodule Retired do end");

    let submission = default_flow()
        .run("retired", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    assert_eq!(submission.to_json().unwrap(), r#"{"status":"disapprove","comments":[]}"#);
}

#[test]
fn test_identical_inputs_produce_identical_reports() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub5");
    fixture.add_source("sub5", "two_fer.ex", "defmodule TwoFer do\n  def two_fer(name), do: name\nend\n");
    let options = fixture.options(json!({"writeResults": false}));

    let first = default_flow()
        .run("two-fer", &path, &fixture.out_dir(), &options)
        .unwrap()
        .to_json()
        .unwrap();
    let second = default_flow()
        .run("two-fer", &path, &fixture.out_dir(), &options)
        .unwrap()
        .to_json()
        .unwrap();

    assert_eq!(first, second);
    assert!(!Path::new(&fixture.out_dir()).join("analysis.json").exists());
}

#[test]
fn test_builtin_two_fer_approves_ideal_solution() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub6");
    fixture.add_source("sub6", "two_fer.ex", TWO_FER);

    let submission = default_flow()
        .run("two-fer", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    assert_eq!(submission.verdict(), Verdict::Approve);
    assert!(submission.comments().is_empty());
}

#[test]
fn test_file_and_module_override() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub7");
    fs::write(
        Path::new(&path).join("greeting.ex"),
        "defmodule HelloWorld do\n  @moduledoc false\n  def hello, do: \"Hello, World!\"\nend\n",
    )
    .unwrap();

    let submission = default_flow()
        .run(
            "hello-world",
            &path,
            &fixture.out_dir(),
            &fixture.options(json!({
                "file": "greeting.ex",
                "module": "HelloWorld",
                "outputFile": "hello.json"
            })),
        )
        .unwrap();

    assert_eq!(submission.verdict(), Verdict::Approve);
    assert!(Path::new(&fixture.out_dir()).join("hello.json").exists());
}

#[test]
fn test_analyzer_failure_is_referred() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub8");
    fixture.add_source("sub8", "two_fer.ex", TWO_FER);

    let submission = flow_with("TwoFer", Arc::new(Broken))
        .run("two-fer", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    let report = fixture.written_report();
    assert_eq!(submission.verdict(), Verdict::Refer);
    assert_eq!(report["status"], json!("refer"));
    assert_eq!(report["comments"][0]["comment"], json!(templates::GENERAL_ANALYZER_FAILED));
    assert_eq!(report["comments"][0]["params"]["analyzer"], json!("Broken"));
}

#[test]
fn test_analyzer_halt_keeps_its_own_verdict() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub13");
    fixture.add_source(
        "sub13",
        "two_fer.ex",
        "defmodule TwoFer do\n  def two_fer(name), do: IO.inspect(name)\nend\n",
    );

    let submission = flow_with("TwoFer", Arc::new(HaltsOnDebugOutput))
        .run("two-fer", &path, &fixture.out_dir(), &fixture.options(json!({})))
        .unwrap();

    assert!(submission.is_analyzed());
    assert!(submission.is_halted());
    assert_eq!(submission.verdict(), Verdict::Disapprove);
    assert_eq!(fixture.written_report(), json!({"status": "disapprove", "comments": []}));
}

#[test]
fn test_unreadable_exercise_config_is_fatal() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub9");

    let err = default_flow()
        .run(
            "two-fer",
            &path,
            &fixture.out_dir(),
            &fixture.options(json!({"exerciseConfigPath": "/nonexistent/exercises.json"})),
        )
        .unwrap_err();

    assert!(matches!(err, AppError::Config(ConfigError::ReadFailed { .. })));
}

#[test]
fn test_output_write_failure_is_fatal() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub10");
    fixture.add_source("sub10", "two_fer.ex", TWO_FER);

    let err = default_flow()
        .run(
            "two-fer",
            &path,
            &fixture.root.path().join("no-such-dir").to_string_lossy(),
            &fixture.options(json!({})),
        )
        .unwrap_err();

    assert!(matches!(err, AppError::File(FileError::WriteFailed { .. })));
}

#[test]
fn test_toml_exercise_config() {
    let fixture = Fixture::new();
    let config_path = fixture.root.path().join("exercises.toml");
    fs::write(
        &config_path,
        "[two-fer]\ncode_file = \"two_fer.ex\"\nanalyzer_module = \"TwoFer\"\n",
    )
    .unwrap();
    let path = fixture.submission_dir("sub11");
    fixture.add_source("sub11", "two_fer.ex", TWO_FER);

    let submission = default_flow()
        .run(
            "two-fer",
            &path,
            &fixture.out_dir(),
            &fixture.options(json!({"exerciseConfigPath": config_path.to_string_lossy()})),
        )
        .unwrap();

    assert_eq!(submission.verdict(), Verdict::Approve);
}

#[test]
fn test_library_entry_point() {
    let fixture = Fixture::new();
    let path = fixture.submission_dir("sub12");

    let submission = analyze(
        "does-not-exist",
        &path,
        &fixture.out_dir(),
        &fixture.options(json!({"writeResults": false})),
    )
    .unwrap();

    assert_eq!(submission.to_json().unwrap(), r#"{"status":"disapprove","comments":[]}"#);
    assert!(!Path::new(&fixture.out_dir()).join("analysis.json").exists());
}
