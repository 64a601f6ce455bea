//! Este modulo contiene el directorio de claves: un actor con forma
//! de set cuyo estado es el conjunto de claves vivas del proceso
use crate::constantes::{ERROR_PATRON, ERROR_TIPO};
use crate::log_msj::log_mensajes::{log_actor_detenido, log_claves_eliminadas};
use crate::registro::const_cmd::*;
use crate::registro::registro_actores::Registro;
use crate::registro::registro_comandos::TipoNodo;
use crate::tipos::dato::Dato;
use glob::Pattern;
use logger::logger::Logger;
use rand::rng;
use rand::seq::IteratorRandom;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::mpsc::{Receiver, channel};
use std::thread::spawn;

use super::comandos_set;
use super::mensaje::{HandleNodo, MensajeNodo, Payload};
use super::scan::escanear;
use super::utils::assert_cantidad_argumentos;

/// Actor singleton registrado bajo el nombre `keys`. Es un set con
/// una capa extra de despacho: los comandos propios del directorio
/// se atienden primero y el resto del vocabulario de sets cae al
/// modulo comun aplicado sobre el propio conjunto de claves
#[derive(Debug)]
pub struct DirectorioClaves {
    claves: HashSet<String>,
    registro: Registro,
    logger: Logger,
}

impl DirectorioClaves {
    /// Crea el directorio y lanza su hilo de atencion
    ///
    /// # Parametros
    /// * `registro`: registro compartido, usado para resolver y
    ///   detener los actores de las claves borradas
    /// * `logger`: logger donde registrar eventos
    ///
    /// # Retorna
    /// - Handle hacia el buzon del directorio
    pub fn spawn(registro: Registro, logger: Logger) -> HandleNodo {
        let (buzon, receptor) = channel();
        let detenido = Arc::new(AtomicBool::new(false));
        let bandera = detenido.clone();

        let mut directorio = DirectorioClaves {
            claves: HashSet::new(),
            registro,
            logger,
        };
        spawn(move || directorio.correr(receptor, bandera));

        HandleNodo::new(TipoNodo::Claves, buzon, detenido)
    }

    /// Bucle principal del directorio, identico en forma al de los
    /// actores de valor
    fn correr(&mut self, receptor: Receiver<MensajeNodo>, detenido: Arc<AtomicBool>) {
        for mensaje in receptor {
            if detenido.load(SeqCst) {
                break;
            }
            match mensaje {
                MensajeNodo::Pregunta(payload, respuesta) => {
                    let dato = self.procesar(&payload).unwrap_or_else(|error| error);
                    let _ = respuesta.send(dato);
                }
                MensajeNodo::Notificacion(payload) => {
                    let _ = self.procesar(&payload);
                }
                MensajeNodo::Detener => break,
            }
        }
        log_actor_detenido(&self.logger, "keys");
    }

    /// Atiende primero la tabla propia del directorio y deriva
    /// cualquier otro comando de vocabulario de set al modulo comun
    fn procesar(&mut self, payload: &Payload) -> Result<Dato, Dato> {
        match payload.tipo() {
            Some(TipoNodo::Claves) | Some(TipoNodo::Conjunto) => {}
            _ => return Err(Dato::new_error(ERROR_TIPO)),
        }

        let argumentos = payload.argumentos();
        match payload.comando() {
            CMD_ADD => self.add(argumentos),
            CMD_KEYS => self.keys(argumentos),
            CMD_SCAN => escanear(self.claves.iter(), argumentos),
            CMD_EXISTS => self.exists(argumentos),
            CMD_RANDOMKEY => self.randomkey(),
            CMD_DEL => self.del(argumentos),
            _ => comandos_set::ejecutar(payload, &mut self.claves, &self.registro),
        }
    }

    /// Registra una clave viva. Lo invoca el registro al crear un
    /// actor de valor
    fn add(&mut self, argumentos: &[String]) -> Result<Dato, Dato> {
        assert_cantidad_argumentos(CMD_ADD, 1, argumentos.len())?;
        let nueva = self.claves.insert(argumentos[0].to_string());
        Ok(Dato::new_entero(if nueva { 1 } else { 0 }))
    }

    /// Devuelve las claves vivas, filtradas por patron glob si se
    /// recibe uno
    fn keys(&self, argumentos: &[String]) -> Result<Dato, Dato> {
        match argumentos.first() {
            Some(patron_texto) => {
                let patron =
                    Pattern::new(patron_texto).map_err(|_| Dato::new_error(ERROR_PATRON))?;
                Ok(Dato::new_lista(
                    self.claves
                        .iter()
                        .filter(|clave| patron.matches(clave))
                        .cloned()
                        .collect(),
                ))
            }
            None => Ok(Dato::new_lista(self.claves.iter().cloned().collect())),
        }
    }

    /// Determina si todas las claves consultadas estan vivas
    ///
    /// # Retorna
    /// - 1 si todas existen, 0 en otro caso
    fn exists(&self, argumentos: &[String]) -> Result<Dato, Dato> {
        assert_cantidad_argumentos(CMD_EXISTS, 1, argumentos.len())?;
        let todas = argumentos.iter().all(|clave| self.claves.contains(clave));
        Ok(Dato::new_entero(if todas { 1 } else { 0 }))
    }

    /// Devuelve una clave viva al azar, nulo si no hay ninguna
    fn randomkey(&self) -> Result<Dato, Dato> {
        match self.claves.iter().choose(&mut rng()) {
            Some(clave) => Ok(Dato::new_texto(clave)),
            None => Ok(Dato::new_nulo()),
        }
    }

    /// Borra las claves recibidas: las quita del conjunto, las
    /// desregistra y detiene cada actor de valor correspondiente
    ///
    /// # Retorna
    /// - La cantidad de claves que estaban presentes al momento
    ///   del borrado
    fn del(&mut self, argumentos: &[String]) -> Result<Dato, Dato> {
        assert_cantidad_argumentos(CMD_DEL, 1, argumentos.len())?;
        let mut presentes = 0;
        for clave in argumentos {
            if !self.claves.remove(clave) {
                continue;
            }
            presentes += 1;
            if let Some(handle) = self.registro.quitar(clave) {
                handle.detener();
            }
        }
        log_claves_eliminadas(&self.logger, presentes);
        Ok(Dato::new_entero(presentes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constantes::TIMEOUT_SESION;

    /// Arma un registro con su directorio ya enganchado
    fn registro_con_directorio() -> (Registro, HandleNodo) {
        let registro = Registro::new(Logger::null());
        let directorio = DirectorioClaves::spawn(registro.clone(), Logger::null());
        registro.registrar_directorio(directorio.clone());
        (registro, directorio)
    }

    fn preguntar(directorio: &HandleNodo, linea: &str) -> Dato {
        directorio
            .preguntar(Payload::desde_linea(linea), TIMEOUT_SESION)
            .unwrap()
    }

    #[test]
    fn test_add_y_exists() {
        let (_registro, directorio) = registro_con_directorio();

        assert_eq!(preguntar(&directorio, "add foo"), Dato::new_entero(1));
        assert_eq!(preguntar(&directorio, "add foo"), Dato::new_entero(0));
        assert_eq!(preguntar(&directorio, "exists foo"), Dato::new_entero(1));
        assert_eq!(preguntar(&directorio, "exists foo bar"), Dato::new_entero(0));
    }

    #[test]
    fn test_keys_con_y_sin_patron() {
        let (_registro, directorio) = registro_con_directorio();
        preguntar(&directorio, "add foo1");
        preguntar(&directorio, "add foo2");
        preguntar(&directorio, "add bar");

        let todas = preguntar(&directorio, "keys").a_linea();
        assert!(todas.contains("foo1") && todas.contains("foo2") && todas.contains("bar"));

        let filtradas = preguntar(&directorio, "keys foo*").a_linea();
        assert!(filtradas.contains("foo1") && filtradas.contains("foo2"));
        assert!(!filtradas.contains("bar"));
    }

    #[test]
    fn test_randomkey() {
        let (_registro, directorio) = registro_con_directorio();
        assert_eq!(preguntar(&directorio, "randomkey"), Dato::new_nulo());

        preguntar(&directorio, "add unica");
        assert_eq!(preguntar(&directorio, "randomkey"), Dato::new_texto("unica"));
    }

    #[test]
    fn test_del_detiene_los_actores() {
        let (registro, directorio) = registro_con_directorio();

        // crea dos actores por el camino estandar
        registro.obtener_o_crear("a", TipoNodo::Cadena).unwrap();
        registro.obtener_o_crear("b", TipoNodo::Lista).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(100));

        assert_eq!(preguntar(&directorio, "del a b fantasma"), Dato::new_entero(2));
        assert_eq!(preguntar(&directorio, "exists a"), Dato::new_entero(0));
        assert!(registro.resolver("a").is_none());
        assert!(registro.resolver("b").is_none());
    }

    #[test]
    fn test_scan_del_directorio() {
        let (_registro, directorio) = registro_con_directorio();
        preguntar(&directorio, "add foo1");
        preguntar(&directorio, "add foo2");
        preguntar(&directorio, "add bar");

        let respuesta = preguntar(&directorio, "scan 0 foo* 10");
        if let Dato::Lista(lineas) = respuesta {
            assert_eq!(lineas[0], "0");
            assert_eq!(lineas.len(), 3);
        } else {
            panic!("se esperaba una lista");
        }
    }

    #[test]
    fn test_vocabulario_de_set_cae_al_modulo_comun() {
        let (_registro, directorio) = registro_con_directorio();
        preguntar(&directorio, "add foo");

        // scard llega tipado como comando de set y opera sobre las claves
        assert_eq!(preguntar(&directorio, "scard keys"), Dato::new_entero(1));
        assert_eq!(preguntar(&directorio, "sismember keys foo"), Dato::new_entero(1));
    }

    #[test]
    fn test_comando_de_otro_tipo_es_rechazado() {
        let (_registro, directorio) = registro_con_directorio();
        let respuesta = preguntar(&directorio, "get keys");
        assert!(respuesta.a_linea().contains("WRONGTYPE"));
    }
}
