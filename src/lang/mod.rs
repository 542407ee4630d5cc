pub mod errors;

use errors::LangError;
use indexmap::IndexMap;

/// One registered language: display name plus the file-name suffixes that
/// qualify a file for inclusion in a print batch.
#[derive(Debug, Clone, Copy)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub suffixes: &'static [&'static str],
}

impl LanguageEntry {
    /// Case-insensitive suffix match against a file name. Compares only the
    /// tail of the name, never the whole name.
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.suffixes.iter().any(|suffix| lower.ends_with(suffix))
    }
}

/// The fixed language-code table. Built once at startup and passed by
/// reference into whatever needs it; iteration order is the registration
/// order below.
#[derive(Debug)]
pub struct LanguageRegistry {
    entries: IndexMap<&'static str, LanguageEntry>,
}

macro_rules! register {
    ($map:expr, $( $code:literal => $name:literal, [$($suffix:literal),+ $(,)?] );+ $(;)?) => {
        $(
            $map.insert(
                $code,
                LanguageEntry { name: $name, suffixes: &[$($suffix),+] },
            );
        )+
    };
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        register!(entries,
            "adab" => "Ada Body", [".adb"];
            "adas" => "Ada Spec", [".ads"];
            "arduino" => "Arduino / Nano Sketch", [".ino"];
            "asp" => "ASP", [".asp"];
            "aspnet" => "ASP.Net", [".aspx", ".axd", ".asx", ".asmx", ".ashx", ".svc"];
            "bash" => "Bash Scripting", [".sh"];
            "basic" => "BASIC", [".bas", ".mod"];
            "batch" => "Batch Files", [".bat"];
            "c" => "C", [".h", ".c", ".cc"];
            "objc" => "Objective C", [".m", ".mm"];
            "cpp" => "C++", [".h", ".cpp", ".cxx"];
            "cs" => "C#", [".cs"];
            "cgi" => "CGI", [".cgi"];
            "cold" => "Cold Fusion", [".cfm"];
            "dm" => "Digital Mars D", [".d"];
            "erl" => "Erlang", [".yaws"];
            "flash" => "Flash", [".swf"];
            "flex" => "Flash/Flex Action", [".as", ".mxml"];
            "html" => "HTML", [".htm", ".html", ".xhtml", ".jhtml"];
            "jsharp" => "J#", [".jsl"];
            "java" => "Java", [".java", ".jsp", ".jspx", ".wss", ".do", ".action"];
            "js" => "JavaScript", [".js", ".jse", ".htm", ".html", ".xhtml", ".asp", ".hta", ".aspx"];
            "lua" => "Lua", [".lua"];
            "math" => "Mathematica", [".m"];
            "meta" => "MetaTrader", [".mq4", ".mq5", ".mqt"];
            "perl" => "Perl", [".pl", ".pm"];
            "php" => "PHP", [".php", ".php3", ".php4", ".phtml"];
            "python" => "Python", [".py"];
            "jupyter" => "Python Notebook", [".ipynb"];
            "r" => "R", [".r"];
            "ruby" => "Ruby", [".rb", ".rhtml"];
            "rails" => "Ruby on Rails", [".erb", ".rjs"];
            "ssl" => "SSL", [".shtml"];
            "tcl" => "TCL", [".tcl"];
            "us" => "Unreal Script", [".uc"];
            "vbnet" => "VB.net", [".vb"];
            "vbs" => "VBScript", [".vbs"];
            "xml" => "XML", [".xml", ".rss", ".svg"];
        );
        LanguageRegistry { entries }
    }

    /// The registry entry for a language code.
    pub fn entry(&self, code: &str) -> Result<&LanguageEntry, LangError> {
        self.entries
            .get(code)
            .ok_or_else(|| LangError::UnknownLanguage(code.to_string()))
    }

    /// The suffix set for a language code.
    pub fn suffixes_for(&self, code: &str) -> Result<&'static [&'static str], LangError> {
        self.entry(code).map(|entry| entry.suffixes)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &LanguageEntry)> {
        self.entries.iter().map(|(code, entry)| (*code, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
