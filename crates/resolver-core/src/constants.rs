//! Constantes del resolver.
//!
//! `DESIRED_COUNT_DEFAULT` es el valor que se usa cuando la configuración no
//! especifica cantidad; nunca se usa para "corregir" un valor inválido.

/// Cantidad de artifacts por canal cuando no se configura otra (n = 1).
pub const DESIRED_COUNT_DEFAULT: usize = 1;

/// Variable de entorno con la cantidad deseada por canal.
pub const ENV_DESIRED_COUNT: &str = "RESOLVER_DESIRED_COUNT";

/// Variable de entorno con la estrategia (`latest` | `all`).
pub const ENV_STRATEGY: &str = "RESOLVER_STRATEGY";
