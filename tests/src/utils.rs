use kv_node::config::config_parser::Config;
use kv_node::servidor::Servidor;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

/// Levanta un servidor en un hilo propio sobre el puerto recibido
/// y espera a que empiece a aceptar conexiones
pub fn iniciar_servidor(puerto: u16) {
    let args = vec![
        "tests".to_string(),
        "127.0.0.1".to_string(),
        puerto.to_string(),
        format!("/tmp/kv_node_test_{puerto}.log"),
    ];
    let config = Config::from_args(&args).expect("configuración inválida");

    thread::spawn(move || {
        let servidor = Servidor::new(config);
        let _ = servidor.start();
    });

    esperar_puerto(puerto);
}

/// Reintenta conectarse hasta que el listener este arriba
fn esperar_puerto(puerto: u16) {
    for _ in 0..100 {
        if TcpStream::connect(("127.0.0.1", puerto)).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(20));
    }
    panic!("el servidor del puerto {puerto} nunca levantó");
}

/// Conexion de un cliente de prueba contra el servidor
pub struct Conexion {
    escritura: TcpStream,
    lectura: BufReader<TcpStream>,
}

impl Conexion {
    pub fn new(puerto: u16) -> Conexion {
        let stream = TcpStream::connect(("127.0.0.1", puerto)).expect("no se pudo conectar");
        let lectura = BufReader::new(stream.try_clone().expect("no se pudo clonar el stream"));
        Conexion {
            escritura: stream,
            lectura,
        }
    }

    /// Envía un comando y devuelve la única línea de respuesta
    pub fn enviar(&mut self, comando: &str) -> String {
        let mut respuesta = self.enviar_multi(comando, 1);
        respuesta.remove(0)
    }

    /// Envía un comando y lee la cantidad de líneas de respuesta
    /// indicada. El protocolo no trae framing, por lo que cada test
    /// sabe cuántas líneas espera
    pub fn enviar_multi(&mut self, comando: &str, lineas: usize) -> Vec<String> {
        self.escritura
            .write_all(format!("{comando}\n").as_bytes())
            .expect("error escribiendo el comando");

        let mut respuesta = Vec::with_capacity(lineas);
        for _ in 0..lineas {
            let mut linea = String::new();
            let leidos = self
                .lectura
                .read_line(&mut linea)
                .expect("error leyendo la respuesta");
            assert!(leidos > 0, "el servidor cerró la conexión");
            respuesta.push(linea.trim_end_matches(['\r', '\n']).to_string());
        }
        respuesta
    }
}
