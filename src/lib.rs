//! Route-style paths built from templates with named parameters.
//!
//! ```
//! use path_def::{path, PathInstance};
//!
//! let user = path("/users/{id}/posts/{post}").unwrap();
//! assert_eq!(user.stringified(), "/users/:id/posts/:post");
//! assert_eq!(user.build(&[("id", "7"), ("post", "hello")]), "/users/7/posts/hello");
//!
//! let dollar = PathInstance::with_prefix("$").parse("/users/{id}").unwrap();
//! assert_eq!(dollar.stringified(), "/users/$id");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod path;

pub use config::{PathInstanceConfig, Route, RouteTable};
pub use error::{PathError, Result};
pub use path::{
    configure, param, path, Param, ParamValue, ParamValues, PathInstance, PathMetadata, PathValue,
    TemplateParser, DEFAULT_PARAM_PREFIX,
};
