//! Built-in tool descriptors - SINGLE SOURCE OF TRUTH
//!
//! Every tool shipped with Toolbox is declared here, in registry order.
//! Listing, lookup and search all derive from this function.

use crate::types::{ToolCategory, ToolDescriptor};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 43;

/// Returns all built-in tool descriptors.
pub fn builtin_descriptors() -> Vec<ToolDescriptor> {
    use ToolCategory::*;

    vec![
        // Encoders (5 tools)
        ToolDescriptor::new(
            "base64-encoder",
            "Base64 Encoder",
            "Encode and decode text or files as Base64",
            Encoder,
        )
        .with_tags(["base64", "encode", "decode"]),
        ToolDescriptor::new(
            "url-encoder",
            "URL Encoder",
            "Percent-encode and decode URL components",
            Encoder,
        )
        .with_tags(["url", "percent", "encode", "decode"]),
        ToolDescriptor::new(
            "text-encoder",
            "Text Encoder",
            "Convert text between UTF-8, hex and binary representations",
            Encoder,
        )
        .with_tags(["text", "utf-8", "hex", "binary"]),
        ToolDescriptor::new(
            "html-entity-encoder",
            "HTML Entity Encoder",
            "Escape and unescape HTML entities",
            Encoder,
        )
        .with_tags(["html", "entities", "escape"]),
        ToolDescriptor::new(
            "jwt-decoder",
            "JWT Decoder",
            "Inspect the header and payload of a JSON Web Token",
            Encoder,
        )
        .with_tags(["jwt", "token", "decode"]),
        // Converters (9 tools)
        ToolDescriptor::new(
            "case-converter",
            "Text Case Converter",
            "Switch text between upper, lower, title, camel and snake case",
            Converter,
        )
        .with_tags(["case", "uppercase", "lowercase", "camel", "snake"]),
        ToolDescriptor::new(
            "json-yaml-converter",
            "JSON to YAML",
            "Convert JSON documents to YAML and back",
            Converter,
        )
        .with_tags(["json", "yaml", "convert"]),
        ToolDescriptor::new(
            "csv-json-converter",
            "CSV to JSON",
            "Turn CSV rows into JSON objects and back",
            Converter,
        )
        .with_tags(["csv", "json", "spreadsheet"]),
        ToolDescriptor::new(
            "markdown-converter",
            "Markdown to HTML",
            "Render Markdown into HTML markup with a live preview",
            Converter,
        )
        .with_tags(["markdown", "html", "preview"]),
        ToolDescriptor::new(
            "unit-converter",
            "Unit Converter",
            "Convert length, weight, temperature and volume units",
            Converter,
        )
        .with_tags(["units", "length", "weight", "temperature"]),
        ToolDescriptor::new(
            "timestamp-converter",
            "Timestamp Converter",
            "Convert Unix timestamps to readable dates and back",
            Converter,
        )
        .with_tags(["unix", "epoch", "date", "time"]),
        ToolDescriptor::new(
            "color-converter",
            "Color Converter",
            "Convert colors between HEX, RGB and HSL notations",
            Converter,
        )
        .with_tags(["color", "hex", "rgb", "hsl"]),
        ToolDescriptor::new(
            "number-base-converter",
            "Number Base Converter",
            "Convert numbers between binary, octal, decimal and hexadecimal",
            Converter,
        )
        .with_tags(["binary", "octal", "decimal", "radix"]),
        ToolDescriptor::new(
            "image-converter",
            "Image Converter",
            "Convert images between PNG, JPEG and WebP",
            Converter,
        )
        .with_tags(["image", "png", "jpeg", "webp"]),
        // Formatters (4 tools)
        ToolDescriptor::new(
            "json-formatter",
            "JSON Formatter",
            "Pretty-print, minify and validate JSON",
            Formatter,
        )
        .with_tags(["json", "prettify", "minify", "validate"]),
        ToolDescriptor::new(
            "sql-formatter",
            "SQL Formatter",
            "Format SQL queries with consistent indentation",
            Formatter,
        )
        .with_tags(["sql", "query", "indent"]),
        ToolDescriptor::new(
            "xml-formatter",
            "XML Formatter",
            "Indent and validate XML documents",
            Formatter,
        )
        .with_tags(["xml", "indent", "validate"]),
        ToolDescriptor::new(
            "css-minifier",
            "CSS Minifier",
            "Minify or beautify CSS stylesheets",
            Formatter,
        )
        .with_tags(["css", "minify", "beautify"]),
        // Generators (5 tools)
        ToolDescriptor::new(
            "password-generator",
            "Password Generator",
            "Generate strong random passwords with custom rules",
            Generator,
        )
        .with_tags(["password", "random", "secure"]),
        ToolDescriptor::new(
            "qr-code-generator",
            "QR Code Generator",
            "Create QR codes from text or links",
            Generator,
        )
        .with_tags(["qr", "barcode", "scan"]),
        ToolDescriptor::new(
            "uuid-generator",
            "UUID Generator",
            "Generate random version 4 UUIDs in bulk",
            Generator,
        )
        .with_tags(["uuid", "guid", "random"]),
        ToolDescriptor::new(
            "lorem-ipsum-generator",
            "Lorem Ipsum Generator",
            "Produce placeholder paragraphs, sentences or words",
            Generator,
        )
        .with_tags(["lorem", "placeholder", "dummy"]),
        ToolDescriptor::new(
            "gradient-generator",
            "CSS Gradient Generator",
            "Design linear and radial gradients and copy the CSS",
            Generator,
        )
        .with_tags(["gradient", "css", "background"]),
        // Calculators (4 tools)
        ToolDescriptor::new(
            "percentage-calculator",
            "Percentage Calculator",
            "Work out percentages, increases and decreases",
            Calculator,
        )
        .with_tags(["percent", "math", "ratio"]),
        ToolDescriptor::new(
            "bmi-calculator",
            "BMI Calculator",
            "Calculate body mass index from height and weight",
            Calculator,
        )
        .with_tags(["bmi", "health", "weight"]),
        ToolDescriptor::new(
            "date-calculator",
            "Date Calculator",
            "Count the days between two dates or add an offset to a date",
            Calculator,
        )
        .with_tags(["date", "days", "duration"]),
        ToolDescriptor::new(
            "loan-calculator",
            "Loan Calculator",
            "Estimate monthly payments and total interest on a loan",
            Calculator,
        )
        .with_tags(["loan", "mortgage", "interest"]),
        // Designers (4 tools)
        ToolDescriptor::new(
            "whiteboard",
            "Whiteboard",
            "Sketch freehand diagrams on an infinite canvas",
            Designer,
        )
        .with_tags(["draw", "sketch", "canvas"]),
        ToolDescriptor::new(
            "color-palette",
            "Color Palette",
            "Build harmonious color palettes from a base color",
            Designer,
        )
        .with_tags(["color", "palette", "scheme"]),
        ToolDescriptor::new(
            "background-remover",
            "Background Remover",
            "Remove a solid background color from an image",
            Designer,
        )
        .with_tags(["image", "background", "transparent", "chroma"]),
        ToolDescriptor::new(
            "image-cropper",
            "Image Cropper",
            "Crop, rotate and resize images in the browser",
            Designer,
        )
        .with_tags(["image", "crop", "resize"]),
        // Security (4 tools)
        ToolDescriptor::new(
            "hash-generator",
            "Hash Generator",
            "Compute MD5, SHA-1 and SHA-256 digests of text",
            Security,
        )
        .with_tags(["hash", "md5", "sha256", "checksum"]),
        ToolDescriptor::new(
            "password-strength",
            "Password Strength Checker",
            "Estimate how hard a password is to guess",
            Security,
        )
        .with_tags(["password", "strength", "entropy"]),
        ToolDescriptor::new(
            "text-encryptor",
            "Text Encryptor",
            "Encrypt and decrypt text with AES and a passphrase",
            Security,
        )
        .with_tags(["aes", "encrypt", "decrypt"]),
        ToolDescriptor::new(
            "htpasswd-generator",
            "Htpasswd Generator",
            "Create bcrypt entries for Apache and Nginx basic auth",
            Security,
        )
        .with_tags(["htpasswd", "bcrypt", "auth"]),
        // Developer tools (4 tools)
        ToolDescriptor::new(
            "regex-tester",
            "Regex Tester",
            "Test regular expressions against sample text with live highlighting",
            Developer,
        )
        .with_tags(["regex", "pattern", "match"]),
        ToolDescriptor::new(
            "diff-checker",
            "Diff Checker",
            "Compare two texts and highlight the differences",
            Developer,
        )
        .with_tags(["diff", "compare", "text"]),
        ToolDescriptor::new(
            "cron-parser",
            "Cron Expression Parser",
            "Explain cron schedules in plain language",
            Developer,
        )
        .with_tags(["cron", "schedule", "crontab"]),
        ToolDescriptor::new(
            "http-status-codes",
            "HTTP Status Codes",
            "Look up the meaning of HTTP response status codes",
            Developer,
        )
        .with_tags(["http", "status", "reference"]),
        // Other (4 tools)
        ToolDescriptor::new(
            "pdf-merger",
            "PDF Merger",
            "Combine several PDF files into one document",
            Other,
        )
        .with_tags(["pdf", "merge", "combine"]),
        ToolDescriptor::new(
            "notes",
            "Notes",
            "Keep quick notes saved in the browser",
            Other,
        )
        .with_tags(["notes", "notepad", "memo"]),
        ToolDescriptor::new(
            "task-manager",
            "Task Manager",
            "Track to-do items with priorities and due dates",
            Other,
        )
        .with_tags(["tasks", "todo", "checklist"]),
        ToolDescriptor::new(
            "word-counter",
            "Word Counter",
            "Count words, characters, sentences and reading time",
            Other,
        )
        .with_tags(["words", "characters", "count"]),
    ]
}
