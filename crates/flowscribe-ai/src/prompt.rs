//! Prompt templates for code generation

/// Generate the user prompt for turning pseudocode into source code
pub fn codegen_prompt(pseudocode: &[String], language: &str) -> String {
    let listing = if pseudocode.is_empty() {
        "(empty program)".to_string()
    } else {
        pseudocode.join("\n")
    };

    format!(r#"Translate the following flowchart pseudocode into a complete {language} program.

Pseudocode:
```
{listing}
```

Conventions used in the pseudocode:
- "begin program" / "end program" mark where execution starts and stops
- "perform: <step>" is a single statement described in plain language
- "if <condition>:" opens a decision; its "[true branch]" and "[false branch]" markers introduce the statements for each outcome, indented one level deeper
- a branch marker with nothing under it continues at a step already listed above (a loop or a merge)

Instructions:
1. Preserve the control flow exactly, including loops implied by branches that jump back
2. Turn each plain-language step into idiomatic {language} code
3. Do not invent behaviour that is not in the pseudocode

Return only the code in a single fenced code block."#)
}

/// System prompt for code generation
pub const CODEGEN_SYSTEM_PROMPT: &str = r#"You are an expert programmer who converts structured pseudocode derived from flowcharts into correct, readable source code.

1. Follow the control flow of the pseudocode exactly
2. Keep variable and step names recognizable
3. Return a single fenced code block and nothing else"#;

/// Pull the body of the first fenced code block out of a model reply.
/// Replies without a fence are returned trimmed.
pub fn extract_code_block(reply: &str) -> String {
    let Some(open) = reply.find("```") else {
        return reply.trim().to_string();
    };
    let after_fence = &reply[open + 3..];
    // Skip the info string (language tag) on the opening fence line.
    let body_start = after_fence.find('\n').map_or(after_fence.len(), |i| i + 1);
    let body = &after_fence[body_start..];
    let body = body.find("```").map_or(body, |close| &body[..close]);
    body.trim_end().to_string()
}
