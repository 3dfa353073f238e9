//! Local provider for offline code generation
//!
//! Renders the pseudocode as a Python skeleton without calling any service.
//! Steps become `step("...")` calls. Decision text is copied verbatim after
//! `if`, so the result is a starting point rather than finished code.

use super::super::generator::{CodeGenRequest, CodeGenerator, GeneratedCode};
use anyhow::Result;
use flowscribe_core::INDENT_STEP;

pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CodeGenerator for LocalProvider {
    async fn generate(&self, request: &CodeGenRequest) -> Result<GeneratedCode> {
        if !request.language.eq_ignore_ascii_case("python") {
            anyhow::bail!(
                "local provider only renders python, got {}",
                request.language
            );
        }
        Ok(GeneratedCode {
            code: render_python(&request.pseudocode),
            provider: self.name().to_string(),
            tokens_used: 0,
        })
    }

    fn name(&self) -> &str {
        "Local (Template)"
    }
}

/// Render pseudocode lines as a Python module skeleton.
pub fn render_python(pseudocode: &[String]) -> String {
    let mut body: Vec<(usize, String)> = Vec::new();
    // Indents of `else:` blocks still open.
    let mut open_else: Vec<usize> = Vec::new();

    for line in pseudocode {
        let text = line.trim_start();
        let indent = line.len() - text.len() + INDENT_STEP;
        match text {
            "begin program" | "[true branch]" => continue,
            // Markers sit one level inside their decision.
            "[false branch]" => {
                let else_indent = indent - INDENT_STEP;
                while open_else.last().is_some_and(|&i| i > else_indent) {
                    open_else.pop();
                }
                // Later false branches of the same decision share its `else:`.
                if open_else.last() != Some(&else_indent) {
                    open_else.push(else_indent);
                    body.push((else_indent, "else:".to_string()));
                }
                continue;
            }
            _ => {}
        }

        while open_else.last().is_some_and(|&i| i >= indent) {
            open_else.pop();
        }
        match text {
            "end program" => body.push((indent, "return".to_string())),
            _ => {
                if let Some(step) = text.strip_prefix("perform: ") {
                    body.push((indent, format!("step({step:?})")));
                } else if text.starts_with("if ") && text.ends_with(':') {
                    body.push((indent, text.to_string()));
                } else {
                    body.push((indent, format!("# {text}")));
                }
            }
        }
    }

    let mut out = String::from("def step(description):\n    print(description)\n\n\ndef main():\n");
    let mut open_block = Some(INDENT_STEP);
    for (indent, stmt) in body {
        if let Some(block_indent) = open_block.take() {
            if indent < block_indent {
                push_line(&mut out, block_indent, "pass");
            }
        }
        if stmt.ends_with(':') {
            open_block = Some(indent + INDENT_STEP);
        }
        push_line(&mut out, indent, &stmt);
    }
    if let Some(block_indent) = open_block {
        push_line(&mut out, block_indent, "pass");
    }

    out.push_str("\n\nif __name__ == \"__main__\":\n    main()\n");
    out
}

fn push_line(out: &mut String, indent: usize, stmt: &str) {
    out.push_str(&" ".repeat(indent));
    out.push_str(stmt);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_empty_branch_gets_pass() {
        let code = render_python(&lines(
            "begin program\n\
             if x>0:\n    \
             [true branch]\n    \
             perform: increment\n    \
             end program\n    \
             [false branch]",
        ));
        assert_eq!(
            code,
            "def step(description):\n    print(description)\n\n\n\
             def main():\n    \
             if x>0:\n        \
             step(\"increment\")\n        \
             return\n    \
             else:\n        \
             pass\n\n\n\
             if __name__ == \"__main__\":\n    main()\n"
        );
    }

    #[test]
    fn test_several_false_edges_share_one_else() {
        let code = render_python(&lines(
            "begin program\n\
             if ready:\n    \
             [false branch]\n    \
             perform: f1\n    \
             [false branch]\n    \
             perform: f2",
        ));
        assert!(code.contains(
            "    if ready:\n        pass\n    else:\n        step(\"f1\")\n        step(\"f2\")\n"
        ));
        assert_eq!(code.matches("else:").count(), 1);
    }

    #[test]
    fn test_sibling_decisions_get_their_own_else() {
        let code = render_python(&lines(
            "begin program\n\
             if a:\n    \
             [false branch]\n    \
             perform: x\n\
             if b:\n    \
             [false branch]\n    \
             perform: y",
        ));
        assert_eq!(code.matches("    else:\n").count(), 2);
        assert!(code.contains("    if b:\n        pass\n    else:\n        step(\"y\")\n"));
    }

    #[test]
    fn test_empty_program_body_gets_pass() {
        let code = render_python(&lines("begin program"));
        assert!(code.contains("def main():\n    pass\n"));
    }

    #[test]
    fn test_quotes_in_steps_escaped() {
        let code = render_python(&lines("begin program\nperform: print \"hi\""));
        assert!(code.contains(r#"    step("print \"hi\"")"#));
    }
}
