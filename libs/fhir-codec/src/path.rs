//! JSON-Pointer path tracking for decode errors.

use smallvec::SmallVec;
use std::borrow::Cow;

#[derive(Debug, Clone)]
enum Segment {
    Field(Cow<'static, str>),
    Index(usize),
}

/// Stack of path segments maintained while walking the input tree.
#[derive(Debug, Default)]
pub struct PathTracker {
    segments: SmallVec<[Segment; 8]>,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_field(&mut self, name: &'static str) {
        self.segments.push(Segment::Field(Cow::Borrowed(name)));
    }

    pub fn push_field_owned(&mut self, name: &str) {
        self.segments.push(Segment::Field(Cow::Owned(name.to_owned())));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Render the current location as a JSON Pointer (RFC 6901).
    pub fn pointer(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Field(name) => out.push_str(&escape(name)),
                Segment::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }
}

fn escape(raw: &str) -> Cow<'_, str> {
    if raw.contains(['~', '/']) {
        Cow::Owned(raw.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_slash() {
        assert_eq!(PathTracker::new().pointer(), "/");
    }

    #[test]
    fn nested_fields_and_indexes() {
        let mut path = PathTracker::new();
        path.push_field("contained");
        path.push_index(0);
        path.push_field("contained");
        assert_eq!(path.pointer(), "/contained/0/contained");
        path.pop();
        path.pop();
        assert_eq!(path.pointer(), "/contained");
    }

    #[test]
    fn pointer_escapes_reserved_characters() {
        let mut path = PathTracker::new();
        path.push_field_owned("odd/name~here");
        assert_eq!(path.pointer(), "/odd~1name~0here");
    }
}
