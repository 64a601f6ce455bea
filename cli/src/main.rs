use kv_node::constantes::{HOST_DEFAULT, PUERTO_DEFAULT};
use std::io::{self, BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::thread;

/// Cliente interactivo del servidor clave-valor.
///
/// Acepta `[host] [puerto]` como argumentos opcionales, con
/// defaults `localhost` y `9999`. Cada linea ingresada por stdin
/// viaja como un comando y cada linea recibida se imprime tal cual.
///
/// # Uso
/// ```bash
/// ./cliente 127.0.0.1 9999
/// ```
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let host = args.get(1).cloned().unwrap_or_else(|| HOST_DEFAULT.to_string());
    let puerto = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| PUERTO_DEFAULT.to_string());
    let direccion = format!("{host}:{puerto}");

    let stream = match TcpStream::connect(&direccion) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error al conectar con {direccion}: {e}");
            return;
        }
    };

    let mut stream_escritura = match stream.try_clone() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error al clonar el stream: {e}");
            return;
        }
    };
    let mut stream_lectura = match stream.try_clone() {
        Ok(s) => BufReader::new(s),
        Err(e) => {
            eprintln!("Error al clonar el stream: {e}");
            return;
        }
    };

    let escritor = thread::spawn(move || {
        println!("Ingresar comando ('q' para salir):");
        for linea in io::stdin().lock().lines() {
            match linea {
                Ok(entrada) if entrada.trim() == "q" => break,
                Ok(entrada) => {
                    if let Err(e) = stream_escritura.write_all(format!("{entrada}\n").as_bytes()) {
                        eprintln!("Error enviando el comando: {e}");
                        break;
                    }
                }
                Err(e) => eprintln!("Error leyendo entrada del usuario: {e}"),
            }
        }
    });

    let lector = thread::spawn(move || {
        let mut respuesta = String::new();
        loop {
            respuesta.clear();
            match stream_lectura.read_line(&mut respuesta) {
                Ok(0) => {
                    println!("El servidor cerró la conexión");
                    break;
                }
                Ok(_) => print!("{respuesta}"),
                Err(e) => {
                    eprintln!("Error leyendo del servidor: {e}");
                    break;
                }
            }
        }
    });

    if let Err(e) = escritor.join() {
        eprintln!("Error en el hilo de entrada: {e:?}");
    }
    let _ = stream.shutdown(Shutdown::Both);
    if let Err(e) = lector.join() {
        eprintln!("Error en el hilo lector: {e:?}");
    }
}
