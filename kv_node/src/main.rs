use kv_node::config::config_parser::Config;
use kv_node::servidor::Servidor;

/// Punto de entrada del servidor clave-valor.
///
/// Acepta `[host] [puerto] [archivo_log] [max_clientes]` como
/// argumentos opcionales, con defaults `localhost`, `9999`,
/// `kv_node.log` y `128`.
///
/// # Uso
/// ```bash
/// ./kv_node 127.0.0.1 9999
/// ```
fn main() {
    let args = std::env::args().collect::<Vec<String>>();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error al cargar la configuración: {e}");
            eprintln!("Uso: {} [host] [puerto] [archivo_log] [max_clientes]", args[0]);
            return;
        }
    };

    println!("Start listening on {}", config.get_address());
    println!("-----------------------------------");
    let servidor = Servidor::new(config);
    if let Err(e) = servidor.start() {
        eprintln!("{e}");
    }
}
