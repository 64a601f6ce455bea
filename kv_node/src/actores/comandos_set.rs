//! Este modulo contiene la implementacion de los comandos para
//! los actores de tipo set, incluyendo el algebra de conjuntos
//! que consulta a otros actores
use crate::constantes::TIMEOUT_FANOUT;
use crate::registro::const_cmd::*;
use crate::registro::registro_actores::Registro;
use crate::registro::registro_comandos::TipoNodo;
use crate::tipos::dato::Dato;
use rand::rng;
use rand::seq::IteratorRandom;
use std::collections::HashSet;

use super::mensaje::Payload;
use super::scan::escanear;
use super::utils::{assert_cantidad_argumentos, assert_cantidad_argumentos_exacta};

/// Despacha un comando de set sobre los miembros del actor
///
/// # Parametros
/// * `payload`: pedido a ejecutar
/// * `miembros`: estado del actor
/// * `registro`: registro de actores, usado por el algebra de
///   conjuntos y por smove para alcanzar las otras claves
///
/// # Retorna
/// - Respuesta del comando, error de comando en otro caso
pub fn ejecutar(
    payload: &Payload,
    miembros: &mut HashSet<String>,
    registro: &Registro,
) -> Result<Dato, Dato> {
    let argumentos = payload.argumentos();
    match payload.comando() {
        CMD_SADD => sadd(argumentos, miembros),
        CMD_SREM => srem(argumentos, miembros),
        CMD_SCARD => scard(miembros),
        CMD_SISMEMBER => sismember(argumentos, miembros),
        CMD_SMEMBERS => smembers(miembros),
        CMD_SRANDMEMBER => srandmember(miembros),
        CMD_SPOP => spop(miembros),
        CMD_SDIFF => algebra(payload, miembros, registro, diferencia).map(a_lista),
        CMD_SINTER => algebra(payload, miembros, registro, interseccion).map(a_lista),
        CMD_SUNION => algebra(payload, miembros, registro, union).map(a_lista),
        CMD_SDIFFSTORE => almacenar(payload, miembros, registro, diferencia),
        CMD_SINTERSTORE => almacenar(payload, miembros, registro, interseccion),
        CMD_SUNIONSTORE => almacenar(payload, miembros, registro, union),
        CMD_SMOVE => smove(argumentos, miembros, registro),
        CMD_SSCAN => escanear(miembros.iter(), argumentos),
        otro => Err(Dato::new_error(&format!(
            "command '{otro}' is not a set command"
        ))),
    }
}

/// Agrega los elementos recibidos al set
///
/// # Retorna
/// - La cantidad de miembros nuevos
pub fn sadd(argumentos: &[String], miembros: &mut HashSet<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_SADD, 1, argumentos.len())?;
    let mut nuevos = 0;
    for elemento in argumentos {
        if miembros.insert(elemento.to_string()) {
            nuevos += 1;
        }
    }
    Ok(Dato::new_entero(nuevos))
}

/// Remueve los elementos recibidos del set
///
/// # Retorna
/// - La cantidad de miembros removidos
pub fn srem(argumentos: &[String], miembros: &mut HashSet<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_SREM, 1, argumentos.len())?;
    let mut removidos = 0;
    for elemento in argumentos {
        if miembros.remove(elemento) {
            removidos += 1;
        }
    }
    Ok(Dato::new_entero(removidos))
}

/// Devuelve la cantidad de miembros del set
pub fn scard(miembros: &HashSet<String>) -> Result<Dato, Dato> {
    Ok(Dato::new_entero(miembros.len() as i64))
}

/// Determina si todos los elementos recibidos pertenecen al set
///
/// # Retorna
/// - 1 si todos pertenecen, 0 en otro caso
pub fn sismember(argumentos: &[String], miembros: &HashSet<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_SISMEMBER, 1, argumentos.len())?;
    let todos = argumentos.iter().all(|elemento| miembros.contains(elemento));
    Ok(Dato::new_entero(if todos { 1 } else { 0 }))
}

/// Devuelve todos los miembros del set
pub fn smembers(miembros: &HashSet<String>) -> Result<Dato, Dato> {
    Ok(Dato::new_lista(miembros.iter().cloned().collect()))
}

/// Devuelve un miembro al azar sin removerlo, nulo si el set esta
/// vacio
pub fn srandmember(miembros: &HashSet<String>) -> Result<Dato, Dato> {
    match miembros.iter().choose(&mut rng()) {
        Some(elemento) => Ok(Dato::new_texto(elemento)),
        None => Ok(Dato::new_nulo()),
    }
}

/// Remueve y devuelve un miembro al azar, nulo si el set esta vacio
pub fn spop(miembros: &mut HashSet<String>) -> Result<Dato, Dato> {
    let elegido = match miembros.iter().choose(&mut rng()) {
        Some(elemento) => elemento.to_string(),
        None => return Ok(Dato::new_nulo()),
    };
    miembros.remove(&elegido);
    Ok(Dato::Texto(elegido))
}

/// Mueve un elemento hacia otro set. El alta en el destino viaja
/// como notificacion por el camino estandar de creacion
///
/// # Parametros
/// * `argumentos`: clave destino y elemento a mover
///
/// # Retorna
/// - 1 si el elemento estaba presente y se movio, 0 en otro caso
pub fn smove(
    argumentos: &[String],
    miembros: &mut HashSet<String>,
    registro: &Registro,
) -> Result<Dato, Dato> {
    assert_cantidad_argumentos_exacta(CMD_SMOVE, 2, argumentos.len())?;
    let destino = &argumentos[0];
    let elemento = &argumentos[1];

    if !miembros.remove(elemento) {
        return Ok(Dato::new_entero(0));
    }

    registro.despachar(
        destino,
        TipoNodo::Conjunto,
        Payload::interno(&[CMD_SADD, destino, elemento]),
    );
    Ok(Dato::new_entero(1))
}

/// Pliega el algebra pedida sobre el propio set y los sets de las
/// claves recibidas, consultados uno a uno con timeout. Una clave
/// inexistente se lee como set vacio y no se crea; la propia clave
/// se resuelve localmente, un actor no se pregunta a si mismo
///
/// # Parametros
/// * `payload`: pedido original, trae la clave propia y las otras
/// * `miembros`: estado del actor, base del pliegue
/// * `registro`: registro de actores
/// * `operacion`: operacion binaria a plegar
///
/// # Retorna
/// - El conjunto resultante, error si algun otro actor contesta
///   con error o no contesta a tiempo
fn algebra(
    payload: &Payload,
    miembros: &HashSet<String>,
    registro: &Registro,
    operacion: fn(HashSet<String>, HashSet<String>) -> HashSet<String>,
) -> Result<HashSet<String>, Dato> {
    let mut resultado = miembros.clone();
    for clave in payload.argumentos() {
        let otros = if clave == payload.clave() {
            miembros.clone()
        } else {
            miembros_remotos(clave, registro)?
        };
        resultado = operacion(resultado, otros);
    }
    Ok(resultado)
}

/// Variante *store del algebra: calcula, reemplaza el propio
/// estado con el resultado y devuelve la nueva cardinalidad
fn almacenar(
    payload: &Payload,
    miembros: &mut HashSet<String>,
    registro: &Registro,
    operacion: fn(HashSet<String>, HashSet<String>) -> HashSet<String>,
) -> Result<Dato, Dato> {
    let resultado = algebra(payload, miembros, registro, operacion)?;
    *miembros = resultado;
    Ok(Dato::new_entero(miembros.len() as i64))
}

/// Pide sus miembros al actor de otra clave
///
/// # Retorna
/// - Los miembros del otro set, vacio si la clave no existe,
///   error ante timeout o respuesta de error
fn miembros_remotos(clave: &str, registro: &Registro) -> Result<HashSet<String>, Dato> {
    let handle = match registro.resolver(clave) {
        Some(handle) => handle,
        None => return Ok(HashSet::new()),
    };

    let respuesta = handle.preguntar(Payload::interno(&[CMD_SMEMBERS, clave]), TIMEOUT_FANOUT)?;
    match respuesta {
        Dato::Lista(elementos) => Ok(elementos.into_iter().collect()),
        Dato::Error(descripcion) => Err(Dato::Error(descripcion)),
        otro => Err(Dato::new_error(&format!(
            "unexpected reply from '{clave}': {}",
            otro.a_linea()
        ))),
    }
}

fn diferencia(propios: HashSet<String>, otros: HashSet<String>) -> HashSet<String> {
    propios.difference(&otros).cloned().collect()
}

fn interseccion(propios: HashSet<String>, otros: HashSet<String>) -> HashSet<String> {
    propios.intersection(&otros).cloned().collect()
}

fn union(propios: HashSet<String>, otros: HashSet<String>) -> HashSet<String> {
    propios.union(&otros).cloned().collect()
}

fn a_lista(miembros: HashSet<String>) -> Dato {
    Dato::new_lista(miembros.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actores::mensaje::Payload;
    use crate::constantes::TIMEOUT_SESION;
    use logger::logger::Logger;
    use std::thread::sleep;
    use std::time::Duration;

    fn ejecutar_linea(linea: &str, miembros: &mut HashSet<String>) -> Result<Dato, Dato> {
        let registro = Registro::new(Logger::null());
        ejecutar(&Payload::desde_linea(linea), miembros, &registro)
    }

    fn conjunto_de(valores: &[&str]) -> HashSet<String> {
        valores.iter().map(|v| v.to_string()).collect()
    }

    /// Crea un actor de set bajo la clave recibida y lo puebla
    fn poblar_set(registro: &Registro, clave: &str, valores: &[&str]) {
        let (handle, _) = registro.obtener_o_crear(clave, TipoNodo::Conjunto).unwrap();
        let mut tokens = vec![CMD_SADD, clave];
        tokens.extend_from_slice(valores);
        handle
            .preguntar(Payload::interno(&tokens), TIMEOUT_SESION)
            .unwrap();
    }

    #[test]
    fn test_sadd_cuenta_solo_los_nuevos() {
        let mut miembros = HashSet::new();
        assert_eq!(
            ejecutar_linea("sadd clave a b c", &mut miembros).unwrap(),
            Dato::new_entero(3)
        );
        assert_eq!(
            ejecutar_linea("sadd clave b d", &mut miembros).unwrap(),
            Dato::new_entero(1)
        );
        assert_eq!(miembros, conjunto_de(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_srem_cuenta_solo_los_removidos() {
        let mut miembros = conjunto_de(&["a", "b"]);
        assert_eq!(
            ejecutar_linea("srem clave a zzz", &mut miembros).unwrap(),
            Dato::new_entero(1)
        );
        assert_eq!(miembros, conjunto_de(&["b"]));
    }

    #[test]
    fn test_scard() {
        let mut miembros = conjunto_de(&["a", "b", "c"]);
        assert_eq!(ejecutar_linea("scard clave", &mut miembros).unwrap(), Dato::new_entero(3));
    }

    #[test]
    fn test_sismember_exige_todos_los_elementos() {
        let mut miembros = conjunto_de(&["a", "b"]);
        assert_eq!(
            ejecutar_linea("sismember clave a", &mut miembros).unwrap(),
            Dato::new_entero(1)
        );
        assert_eq!(
            ejecutar_linea("sismember clave a b", &mut miembros).unwrap(),
            Dato::new_entero(1)
        );
        assert_eq!(
            ejecutar_linea("sismember clave a zzz", &mut miembros).unwrap(),
            Dato::new_entero(0)
        );
    }

    #[test]
    fn test_smembers() {
        let mut miembros = conjunto_de(&["a", "b"]);
        let respuesta = ejecutar_linea("smembers clave", &mut miembros).unwrap();
        if let Dato::Lista(elementos) = respuesta {
            let obtenido: HashSet<String> = elementos.into_iter().collect();
            assert_eq!(obtenido, conjunto_de(&["a", "b"]));
        } else {
            panic!("se esperaba una lista");
        }
    }

    #[test]
    fn test_spop_remueve_un_miembro() {
        let mut miembros = conjunto_de(&["a", "b"]);
        let respuesta = ejecutar_linea("spop clave", &mut miembros).unwrap();
        if let Dato::Texto(elemento) = respuesta {
            assert!(!miembros.contains(&elemento));
            assert_eq!(miembros.len(), 1);
        } else {
            panic!("se esperaba un texto");
        }
    }

    #[test]
    fn test_spop_y_srandmember_sobre_vacio() {
        let mut miembros = HashSet::new();
        assert_eq!(ejecutar_linea("spop clave", &mut miembros).unwrap(), Dato::new_nulo());
        assert_eq!(
            ejecutar_linea("srandmember clave", &mut miembros).unwrap(),
            Dato::new_nulo()
        );
    }

    #[test]
    fn test_srandmember_no_muta() {
        let mut miembros = conjunto_de(&["a", "b"]);
        ejecutar_linea("srandmember clave", &mut miembros).unwrap();
        assert_eq!(miembros.len(), 2);
    }

    #[test]
    fn test_sunion_pliega_contra_otros_actores() {
        let registro = Registro::new(Logger::null());
        poblar_set(&registro, "b", &["3", "4", "5"]);

        let mut miembros = conjunto_de(&["1", "2", "3"]);
        let payload = Payload::desde_linea("sunion a b");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();

        if let Dato::Lista(elementos) = respuesta {
            let obtenido: HashSet<String> = elementos.into_iter().collect();
            assert_eq!(obtenido, conjunto_de(&["1", "2", "3", "4", "5"]));
        } else {
            panic!("se esperaba una lista");
        }
    }

    #[test]
    fn test_sdiff_arranca_del_propio_set() {
        let registro = Registro::new(Logger::null());
        poblar_set(&registro, "b", &["2"]);
        poblar_set(&registro, "c", &["3"]);

        let mut miembros = conjunto_de(&["1", "2", "3"]);
        let payload = Payload::desde_linea("sdiff a b c");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();

        if let Dato::Lista(elementos) = respuesta {
            assert_eq!(elementos, vec!["1".to_string()]);
        } else {
            panic!("se esperaba una lista");
        }
    }

    #[test]
    fn test_sunion_con_la_propia_clave_no_se_pregunta() {
        let registro = Registro::new(Logger::null());
        let mut miembros = conjunto_de(&["1", "2"]);

        let payload = Payload::desde_linea("sunion a a");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();

        if let Dato::Lista(elementos) = respuesta {
            let obtenido: HashSet<String> = elementos.into_iter().collect();
            assert_eq!(obtenido, conjunto_de(&["1", "2"]));
        } else {
            panic!("se esperaba una lista");
        }
    }

    #[test]
    fn test_sinter_con_clave_inexistente_es_vacia() {
        let registro = Registro::new(Logger::null());
        let mut miembros = conjunto_de(&["1", "2"]);

        let payload = Payload::desde_linea("sinter a fantasma");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();
        assert_eq!(respuesta, Dato::new_lista(vec![]));
        // la clave consultada no se crea
        assert!(registro.resolver("fantasma").is_none());
    }

    #[test]
    fn test_sunionstore_reemplaza_el_propio_estado() {
        let registro = Registro::new(Logger::null());
        poblar_set(&registro, "b", &["3", "4", "5"]);

        let mut miembros = conjunto_de(&["1", "2", "3"]);
        let payload = Payload::desde_linea("sunionstore a b");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();

        assert_eq!(respuesta, Dato::new_entero(5));
        assert_eq!(miembros, conjunto_de(&["1", "2", "3", "4", "5"]));
    }

    #[test]
    fn test_smove_mueve_el_elemento() {
        let registro = Registro::new(Logger::null());
        let mut miembros = conjunto_de(&["a", "b"]);

        let payload = Payload::desde_linea("smove origen destino a");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();
        assert_eq!(respuesta, Dato::new_entero(1));
        assert_eq!(miembros, conjunto_de(&["b"]));

        sleep(Duration::from_millis(100));
        let destino = registro.resolver("destino").unwrap();
        let respuesta = destino
            .preguntar(Payload::desde_linea("sismember destino a"), TIMEOUT_SESION)
            .unwrap();
        assert_eq!(respuesta, Dato::new_entero(1));
    }

    #[test]
    fn test_smove_sin_el_elemento() {
        let registro = Registro::new(Logger::null());
        let mut miembros = conjunto_de(&["b"]);

        let payload = Payload::desde_linea("smove origen destino a");
        let respuesta = ejecutar(&payload, &mut miembros, &registro).unwrap();
        assert_eq!(respuesta, Dato::new_entero(0));
        assert!(registro.resolver("destino").is_none());
    }

    #[test]
    fn test_sscan_filtra_los_miembros() {
        let mut miembros = conjunto_de(&["foo1", "foo2", "bar"]);
        let respuesta = ejecutar_linea("sscan clave 0 foo* 10", &mut miembros).unwrap();

        if let Dato::Lista(lineas) = respuesta {
            assert_eq!(lineas[0], "0");
            assert_eq!(lineas.len(), 3);
            assert!(lineas.contains(&"foo1".to_string()));
            assert!(lineas.contains(&"foo2".to_string()));
        } else {
            panic!("se esperaba una lista");
        }
    }
}
