//! Fixed package lists and scan defaults.
//!
//! ## Defaults
//!
//! - Directories: `src`, `lib` (plus the project root's own top-level files)
//! - Extensions: `ts`, `js`, `tsx`, `jsx`

/// Sub-directories scanned when none are given
pub const DEFAULT_DIRECTORIES: &str = "src,lib";

/// File extensions scanned when none are given
pub const DEFAULT_EXTENSIONS: &str = "ts,js,tsx,jsx";

/// Manifest file expected at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Prefix of type declaration packages published from DefinitelyTyped
pub const TYPES_PREFIX: &str = "@types/";

/// Entry declaration file used when a types package declares none
pub const DEFAULT_TYPES_ENTRY: &str = "index.d.ts";

/// Packages that tooling pulls in without a textual import.
pub const IMPLICIT_PACKAGES: &[&str] = &[
    "tslib",               // TypeScript `importHelpers`
    "@babel/runtime",      // Babel transform-runtime
    "babel-runtime",       // Babel 6 transform-runtime
    "regenerator-runtime", // async/generator polyfill
    "jest",                // test globals
];

/// Node.js built-in modules by top-level name. Sub-modules such as
/// `fs/promises` are covered once the specifier is reduced to `fs`.
pub const BUILTIN_MODULES: &[&str] = &[
    "_http_agent",
    "_http_client",
    "_http_common",
    "_http_incoming",
    "_http_outgoing",
    "_http_server",
    "_stream_duplex",
    "_stream_passthrough",
    "_stream_readable",
    "_stream_transform",
    "_stream_wrap",
    "_stream_writable",
    "_tls_common",
    "_tls_wrap",
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];
