//! C# code emitter
//!
//! Renders member groups into a single C# source file. Each group becomes:
//! - an enum whose values are the member ids
//! - a nested `<Group>Names` class of string constants holding the raw names
//! - `ToName` / `TryParse<Group>` helpers converting between the two
//!
//! Members that cannot be emitted are written as comments so the reader can
//! see which asset produced them and why they were left out.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Write};
use unity_consts_core::{ConstGenError, InvalidReason, LineEnding, Member, MemberGroup, Result};

/// C# keywords that need an `@` prefix to be used as identifiers
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Why a member is rendered as a comment instead of code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The name failed validation
    Invalid(InvalidReason),
    /// An earlier member of the group already has this name
    DuplicateName,
    /// An earlier member of the group already has this id
    IdCollision { with: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Invalid(reason) => write!(f, "{}", reason),
            SkipReason::DuplicateName => write!(f, "duplicate name"),
            SkipReason::IdCollision { with } => write!(f, "id collides with {}", with),
        }
    }
}

/// A member and whether it makes it into the generated code
#[derive(Debug, Clone)]
pub struct PlannedMember<'a> {
    pub member: &'a Member,
    pub skip: Option<SkipReason>,
}

impl PlannedMember<'_> {
    pub fn is_emitted(&self) -> bool {
        self.skip.is_none()
    }
}

/// Decide, in order, which members of a group are emitted.
///
/// The first valid occurrence of a name or id wins; later ones are skipped so
/// the generated enum and switch statements stay compilable.
pub fn plan_group(group: &MemberGroup) -> Vec<PlannedMember<'_>> {
    let mut names: HashSet<&str> = HashSet::new();
    let mut ids: HashMap<u32, &str> = HashMap::new();

    group
        .members
        .iter()
        .map(|member| {
            let skip = if let Some(reason) = member.invalid_reason {
                Some(SkipReason::Invalid(reason))
            } else if names.contains(member.name.as_str()) {
                Some(SkipReason::DuplicateName)
            } else if let Some(existing) = ids.get(&member.id) {
                Some(SkipReason::IdCollision {
                    with: existing.to_string(),
                })
            } else {
                names.insert(&member.name);
                ids.insert(member.id, &member.name);
                None
            };
            PlannedMember { member, skip }
        })
        .collect()
}

/// Escape a name for use as a C# identifier
fn identifier(name: &str) -> String {
    if CSHARP_KEYWORDS.contains(&name) {
        format!("@{}", name)
    } else {
        name.to_string()
    }
}

/// Quote a string as a C# literal
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// C# emitter for member groups
pub struct CSharpEmitter {
    /// Name of the generated static class
    class_name: String,
    /// Optional namespace wrapping the class
    namespace: Option<String>,
    /// Line ending style to use
    line_ending: LineEnding,
    /// Indent size (4 spaces, the C# convention)
    indent_size: usize,
    /// Current indentation level
    indent_level: usize,
}

impl CSharpEmitter {
    /// Create an emitter producing `public static partial class <class_name>`
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: None,
            line_ending: LineEnding::Unix,
            indent_size: 4,
            indent_level: 0,
        }
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Set line ending style
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Render all groups to a string
    pub fn emit_to_string(&mut self, groups: &[MemberGroup]) -> Result<String> {
        let mut output = String::new();
        self.emit_to_writer(&mut output, groups)?;
        Ok(output)
    }

    /// Render all groups to a writer
    pub fn emit_to_writer<W: Write>(&mut self, writer: &mut W, groups: &[MemberGroup]) -> Result<()> {
        self.indent_level = 0;
        self.render(writer, groups)
            .map_err(|e| ConstGenError::emit(format!("Failed to write C# source: {}", e)))
    }

    fn render<W: Write>(&mut self, w: &mut W, groups: &[MemberGroup]) -> fmt::Result {
        self.line(w, "// <auto-generated>")?;
        self.line(
            w,
            &format!(
                "//     Generated by unity-consts {} from Unity project assets.",
                env!("CARGO_PKG_VERSION")
            ),
        )?;
        self.line(w, "//     Changes to this file will be lost when the code is regenerated.")?;
        self.line(w, "// </auto-generated>")?;
        self.blank(w)?;

        if let Some(namespace) = self.namespace.clone() {
            self.line(w, &format!("namespace {}", namespace))?;
            self.open(w)?;
        }

        self.line(w, &format!("public static partial class {}", self.class_name))?;
        self.open(w)?;
        for (index, group) in groups.iter().enumerate() {
            if index > 0 {
                self.blank(w)?;
            }
            self.render_group(w, group)?;
        }
        self.close(w)?;

        if self.namespace.is_some() {
            self.close(w)?;
        }
        Ok(())
    }

    fn render_group<W: Write>(&mut self, w: &mut W, group: &MemberGroup) -> fmt::Result {
        let plan = plan_group(group);
        let type_name = group.name();
        let names_class = format!("{}Names", type_name);
        let emitted: Vec<&Member> = plan
            .iter()
            .filter(|p| p.is_emitted())
            .map(|p| p.member)
            .collect();

        // enum
        self.line(w, &format!("public enum {}", type_name))?;
        self.open(w)?;
        for planned in &plan {
            let member = planned.member;
            match &planned.skip {
                None => self.line(w, &format!("{} = {},", identifier(&member.name), member.id))?,
                Some(reason) => self.skipped(w, member, reason)?,
            }
        }
        self.close(w)?;
        self.blank(w)?;

        // string constants
        self.line(w, &format!("public static class {}", names_class))?;
        self.open(w)?;
        for member in &emitted {
            self.line(
                w,
                &format!(
                    "public const string {} = {};",
                    identifier(&member.name),
                    string_literal(&member.raw_value)
                ),
            )?;
        }
        self.close(w)?;
        self.blank(w)?;

        // enum -> string
        self.line(w, &format!("public static string ToName(this {} value)", type_name))?;
        self.open(w)?;
        self.line(w, "switch (value)")?;
        self.open(w)?;
        for member in &emitted {
            let name = identifier(&member.name);
            self.line(
                w,
                &format!("case {}.{}: return {}.{};", type_name, name, names_class, name),
            )?;
        }
        self.line(w, "default: return null;")?;
        self.close(w)?;
        self.close(w)?;
        self.blank(w)?;

        // string -> enum
        self.line(
            w,
            &format!("public static bool TryParse{}(string name, out {} value)", type_name, type_name),
        )?;
        self.open(w)?;
        self.line(w, "switch (name)")?;
        self.open(w)?;
        for member in &emitted {
            let name = identifier(&member.name);
            self.line(
                w,
                &format!(
                    "case {}.{}: value = {}.{}; return true;",
                    names_class, name, type_name, name
                ),
            )?;
        }
        self.line(w, &format!("default: value = default({}); return false;", type_name))?;
        self.close(w)?;
        self.close(w)
    }

    fn skipped<W: Write>(&self, w: &mut W, member: &Member, reason: &SkipReason) -> fmt::Result {
        let source = if member.is_synthesized() {
            "built-in".to_string()
        } else {
            member.source_path.display().to_string()
        };
        self.line(
            w,
            &format!("// Skipped {:?} ({}): {}", member.raw_value, source, reason),
        )
    }

    fn line<W: Write>(&self, w: &mut W, text: &str) -> fmt::Result {
        let indent = " ".repeat(self.indent_level * self.indent_size);
        write!(w, "{}{}{}", indent, text, self.line_ending.as_str())
    }

    fn blank<W: Write>(&self, w: &mut W) -> fmt::Result {
        w.write_str(self.line_ending.as_str())
    }

    fn open<W: Write>(&mut self, w: &mut W) -> fmt::Result {
        self.line(w, "{")?;
        self.indent_level += 1;
        Ok(())
    }

    fn close<W: Write>(&mut self, w: &mut W) -> fmt::Result {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.line(w, "}")
    }
}
