//! Unit tests for flowscribe-ai

use crate::generator::{CodeGenRequest, DEFAULT_LANGUAGE};
use crate::prompt::{codegen_prompt, extract_code_block};
use crate::providers::create_generator;

fn canonical() -> Vec<String> {
    [
        "begin program",
        "if x>0:",
        "    [true branch]",
        "    perform: increment",
        "    end program",
        "    [false branch]",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_provider_creation() {
    assert!(create_generator("openai", Some("key".to_string()), None).is_ok());
    assert!(create_generator("local", None, None).is_ok());

    let unknown = create_generator("unknown", None, None);
    assert!(unknown.is_err());
}

#[test]
fn test_prompt_embeds_listing_and_language() {
    let prompt = codegen_prompt(&canonical(), "rust");
    assert!(prompt.contains("complete rust program"));
    assert!(prompt.contains("if x>0:\n    [true branch]\n    perform: increment"));
}

#[test]
fn test_prompt_empty_listing() {
    let prompt = codegen_prompt(&[], DEFAULT_LANGUAGE);
    assert!(prompt.contains("(empty program)"));
}

#[test]
fn test_extract_code_block() {
    let reply = "Here you go:\n```python\ndef main():\n    pass\n```\nThanks";
    insta::assert_snapshot!(extract_code_block(reply), @r"
    def main():
        pass
    ");

    assert_eq!(extract_code_block("  x = 1\n"), "x = 1");
    assert_eq!(extract_code_block("```\nunterminated\n"), "unterminated");
}

#[tokio::test]
async fn test_local_generation() {
    let generator = create_generator("local", None, None).unwrap();
    let request = CodeGenRequest::new(canonical(), DEFAULT_LANGUAGE);

    let generated = generator.generate(&request).await.unwrap();
    assert_eq!(generated.provider, "Local (Template)");
    assert_eq!(generated.tokens_used, 0);
    assert!(generated.code.contains("    if x>0:\n        step(\"increment\")"));
}

#[tokio::test]
async fn test_local_rejects_other_languages() {
    let generator = create_generator("local", None, None).unwrap();
    let request = CodeGenRequest::new(canonical(), "cobol");
    assert!(generator.generate(&request).await.is_err());
}

#[tokio::test]
async fn test_openai_without_key_fails_before_network() {
    let generator = create_generator("openai", Some(String::new()), None).unwrap();
    let request = CodeGenRequest::new(canonical(), DEFAULT_LANGUAGE);
    let err = generator.generate(&request).await.unwrap_err();
    assert!(err.to_string().contains("API key"));
}
