//! Tagged shader source files.
//!
//! A `.shader` file carries both pipeline stages in one text file, separated
//! by `#shader vertex` / `#shader fragment` tag lines. Every non-tag line
//! belongs to the most recently declared stage. [`ShaderSource`] is the split
//! result, parsed once and consumed once when the program is built.

use std::str::FromStr;

/// One vertex-stage and one fragment-stage GLSL source, split out of a
/// combined `.shader` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

const TAG: &str = "#shader";

#[derive(Clone, Copy)]
enum Stage {
    Vertex,
    Fragment,
}

impl FromStr for ShaderSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut source = ShaderSource::default();
        let mut stage: Option<Stage> = None;

        for (number, line) in s.lines().enumerate() {
            if line.contains(TAG) {
                if line.contains("vertex") {
                    stage = Some(Stage::Vertex);
                } else if line.contains("fragment") {
                    stage = Some(Stage::Fragment);
                } else {
                    return Err(format!(
                        "line {}: unknown shader stage in tag: {:?}",
                        number + 1,
                        line.trim()
                    ));
                }
                continue;
            }

            match stage {
                Some(Stage::Vertex) => {
                    source.vertex.push_str(line);
                    source.vertex.push('\n');
                }
                Some(Stage::Fragment) => {
                    source.fragment.push_str(line);
                    source.fragment.push('\n');
                }
                // Blank lines before the first tag are tolerated; anything
                // else has no stage to belong to.
                None if line.trim().is_empty() => {}
                None => {
                    return Err(format!(
                        "line {}: source before the first {} tag: {:?}",
                        number + 1,
                        TAG,
                        line.trim()
                    ));
                }
            }
        }

        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_both_stages() {
        let source: ShaderSource = "#shader vertex\nA\n#shader fragment\nB\n".parse().unwrap();
        assert_eq!(source.vertex, "A\n");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn test_lines_kept_verbatim() {
        let input = "#shader fragment\n  indented;\n\n// comment\n";
        let source: ShaderSource = input.parse().unwrap();
        assert_eq!(source.vertex, "");
        assert_eq!(source.fragment, "  indented;\n\n// comment\n");
    }

    #[test]
    fn test_repeated_tags_append() {
        let input = "#shader vertex\nv1\n#shader fragment\nf1\n#shader vertex\nv2\n";
        let source: ShaderSource = input.parse().unwrap();
        assert_eq!(source.vertex, "v1\nv2\n");
        assert_eq!(source.fragment, "f1\n");
    }

    #[test]
    fn test_round_trip() {
        let vertex = "void main() {\n    gl_Position = vec4(0.0);\n}\n";
        let fragment = "void main() {\n    discard;\n}\n";
        let combined = format!("#shader vertex\n{vertex}#shader fragment\n{fragment}");
        let source: ShaderSource = combined.parse().unwrap();
        assert_eq!(source.vertex, vertex);
        assert_eq!(source.fragment, fragment);
    }

    #[test]
    fn test_untagged_leading_source_is_an_error() {
        let err = "void main() {}\n".parse::<ShaderSource>().unwrap_err();
        assert!(err.contains("line 1"), "{err}");
    }

    #[test]
    fn test_blank_leading_lines_are_fine() {
        let source: ShaderSource = "\n\n#shader vertex\nA\n".parse().unwrap();
        assert_eq!(source.vertex, "A\n");
    }

    #[test]
    fn test_unknown_stage_is_an_error() {
        let err = "#shader geometry\nG\n".parse::<ShaderSource>().unwrap_err();
        assert!(err.contains("unknown shader stage"), "{err}");
    }

    #[test]
    fn test_empty_input_is_two_empty_stages() {
        let source: ShaderSource = "".parse().unwrap();
        assert_eq!(source, ShaderSource::default());
    }
}
