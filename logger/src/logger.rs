//! Este modulo contiene la implementacion de la estructura logger,
//! encargada de registrar los eventos del servidor en un archivo de log
use chrono;
use std::{
    fmt::Display,
    fs::OpenOptions,
    io::Write,
    sync::mpsc::{Receiver, Sender, channel},
    thread::spawn,
};

/// Nivel de severidad de un mensaje de log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NivelLog {
    Info,
    Warn,
    Error,
    Debug,
}

impl NivelLog {
    /// Etiqueta con la que el nivel se escribe en el archivo
    fn etiqueta(&self) -> &'static str {
        match self {
            NivelLog::Info => "[INFO]",
            NivelLog::Warn => "[WARNING]",
            NivelLog::Error => "[ERROR]",
            NivelLog::Debug => "[DEBUG]",
        }
    }
}

/// Estructura que registra mensajes en un archivo de log.
/// La escritura ocurre en un hilo dedicado, por lo que loggear
/// nunca bloquea al hilo que emite el mensaje
#[derive(Debug, Clone)]
pub struct Logger {
    emisor: Sender<String>,
}

impl Logger {
    /// Constructor de la estructura.
    /// Lanza el hilo escritor asociado al archivo recibido
    ///
    /// # Parametros
    /// * `ruta`: nombre del archivo donde escribir los mensajes
    pub fn new(ruta: &str) -> Logger {
        let (emisor, receptor) = channel();
        let ruta = ruta.to_string();

        spawn(move || {
            escribir_en_archivo(&ruta, receptor);
        });

        Logger { emisor }
    }

    /// Crea un logger que descarta todos los mensajes, util en tests
    pub fn null() -> Self {
        let (emisor, receptor) = channel::<String>();
        spawn(move || for _ in receptor {});
        Self { emisor }
    }

    /// Registra un mensaje de tipo info
    /// # Parametros
    /// * `mensaje`: mensaje a registrar
    /// * `modulo`: unidad logica del programa que emite la informacion
    pub fn info(&self, mensaje: &str, modulo: &str) {
        self.registrar(NivelLog::Info, mensaje, modulo);
    }

    /// Registra un mensaje de tipo warning
    /// # Parametros
    /// * `mensaje`: mensaje a registrar
    /// * `modulo`: unidad logica del programa que emite la informacion
    pub fn warn(&self, mensaje: &str, modulo: &str) {
        self.registrar(NivelLog::Warn, mensaje, modulo);
    }

    /// Registra un mensaje de tipo error
    /// # Parametros
    /// * `mensaje`: mensaje a registrar
    /// * `modulo`: unidad logica del programa donde se produjo el error
    pub fn error(&self, mensaje: &str, modulo: &str) {
        self.registrar(NivelLog::Error, mensaje, modulo);
    }

    /// Registra un mensaje de tipo debug junto a un dato adicional
    /// # Parametros
    /// * `mensaje`: mensaje a registrar
    /// * `modulo`: unidad logica del programa que emite la informacion
    /// * `dato`: informacion del caso particular
    pub fn debug<T: Display>(&self, mensaje: &str, modulo: &str, dato: T) {
        self.registrar(NivelLog::Debug, &format!("{mensaje} - {dato}"), modulo);
    }

    /// Arma la linea de log con timestamp y la envia por el canal
    /// del hilo escritor
    fn registrar(&self, nivel: NivelLog, mensaje: &str, modulo: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let linea = format!("{} - {timestamp} - {modulo}: {mensaje}", nivel.etiqueta());
        if self.emisor.send(linea).is_err() {
            eprintln!("Error enviando mensaje al hilo del logger");
        }
    }
}

/// Recibe mensajes y los escribe en el archivo recibido por parametro.
/// Corre hasta que todos los emisores del canal se hayan cerrado
///
/// # Parametros
/// * `ruta`: nombre del archivo donde registrar los mensajes
/// * `receptor`: extremo de recepcion del canal que comparte con la
///   estructura principal por donde recibe los mensajes
fn escribir_en_archivo(ruta: &str, receptor: Receiver<String>) {
    let archivo = OpenOptions::new().create(true).append(true).open(ruta);

    let mut archivo = match archivo {
        Ok(archivo) => archivo,
        Err(e) => {
            eprintln!("Error abriendo el archivo de log: {e}");
            return;
        }
    };

    for mensaje in receptor {
        if let Err(e) = writeln!(archivo, "{mensaje}") {
            eprintln!("Error escribiendo en el archivo de log: {e}");
        }
    }
}
