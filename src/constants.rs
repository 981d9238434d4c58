//! Parametros de configuracion de la cocina

/// Archivo con la descripcion de la cocina que se usa si no se indica otro por linea de comandos
pub const DEFAULT_KITCHEN_FILE: &str = "kitchen.json";

/// Nombre que se asigna a platos y estaciones sin un nombre valido
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Nivel de log por defecto. Se puede sobreescribir con la variable de entorno `RUST_LOG`
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
