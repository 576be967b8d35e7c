//! Unit tests for the ANSI serializer

use ansimark::{format, serialize, wrap_for_chat, Document, Selection, StyleAttribute};

#[cfg(test)]
mod serializer_tests {
    use super::*;

    #[test]
    fn test_plain_document_serializes_to_raw_text() {
        let doc = Document::from_text("no formatting here");
        assert_eq!(serialize(&doc), "no formatting here");
    }

    #[test]
    fn test_empty_document_serializes_to_empty_string() {
        let doc = Document::from_text("");
        assert_eq!(serialize(&doc), "");
    }

    #[test]
    fn test_hello_world_scenario() {
        // document = "hello world", Red on "hello"
        let mut doc = Document::from_text("hello world");
        format::apply(&mut doc, Selection::new(0, 5), StyleAttribute::foreground(31)).unwrap();
        assert_eq!(serialize(&doc), "\x1b[31mhello\x1b[0m world");

        // Bold on "world" leaves the red span untouched
        format::apply(&mut doc, Selection::new(6, 11), StyleAttribute::text_style(1)).unwrap();
        assert_eq!(
            serialize(&doc),
            "\x1b[31mhello\x1b[0m \x1b[1mworld\x1b[0m"
        );

        // Reset yields the plain text again
        doc.reset();
        assert_eq!(serialize(&doc), "hello world");
    }

    #[test]
    fn test_combined_prefix_uses_insertion_order() {
        let mut doc = Document::from_text("hi");
        format::apply(&mut doc, Selection::new(0, 2), StyleAttribute::text_style(4)).unwrap();
        format::apply(&mut doc, Selection::new(0, 2), StyleAttribute::foreground(36)).unwrap();
        assert_eq!(serialize(&doc), "\x1b[4;36mhi\x1b[0m");
    }

    #[test]
    fn test_each_run_emits_its_own_escape_pair() {
        let mut doc = Document::from_text("abc");
        format::apply(&mut doc, Selection::new(0, 3), StyleAttribute::foreground(32)).unwrap();
        // Splitting the green span in two with a background change produces
        // three independently wrapped regions, never a shared prefix
        format::apply(&mut doc, Selection::new(1, 2), StyleAttribute::background(40)).unwrap();
        assert_eq!(
            serialize(&doc),
            "\x1b[32ma\x1b[0m\x1b[32;40mb\x1b[0m\x1b[32mc\x1b[0m"
        );
    }

    #[test]
    fn test_serialize_twice_is_byte_identical() {
        let mut doc = Document::from_text("stable output");
        format::apply(&mut doc, Selection::new(0, 6), StyleAttribute::foreground(35)).unwrap();
        format::apply(&mut doc, Selection::new(7, 13), StyleAttribute::background(44)).unwrap();

        let first = serialize(&doc);
        let second = serialize(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialize_does_not_mutate_document() {
        let mut doc = Document::from_text("hello");
        format::apply(&mut doc, Selection::new(0, 5), StyleAttribute::foreground(31)).unwrap();

        let before = doc.clone();
        let _ = serialize(&doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_wrap_for_chat_exact_fencing() {
        let payload = "\x1b[31mhello\x1b[0m world";
        assert_eq!(
            wrap_for_chat(payload),
            format!("```ansi\n{}\n```", payload)
        );

        // The fence applies even to empty payloads
        assert_eq!(wrap_for_chat(""), "```ansi\n\n```");
    }

    #[test]
    fn test_multibyte_text_survives_serialization() {
        let mut doc = Document::from_text("héllo wörld");
        // "héllo" is 6 bytes
        format::apply(&mut doc, Selection::new(0, 6), StyleAttribute::foreground(34)).unwrap();
        assert_eq!(serialize(&doc), "\x1b[34mhéllo\x1b[0m wörld");
    }
}
