//! Este modulo contiene la tabla estatica que asocia cada comando
//! con el tipo de nodo que lo atiende y sus precondiciones
use crate::registro::const_cmd::*;

/// Tipo de nodo que posee un comando. Los primeros cuatro son los
/// actores de valor, `Claves` es el directorio y `Cliente` agrupa
/// los comandos que la sesion ejecuta sin tocar un unico actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoNodo {
    Cadena,
    Hash,
    Lista,
    Conjunto,
    Claves,
    Cliente,
}

/// Devuelve el tipo de nodo dueño de un comando
///
/// # Parametros
/// * `comando`: nombre del comando en minusculas
///
/// # Retorna
/// - Some con el tipo dueño, None si el comando es desconocido
pub fn tipo_de_comando(comando: &str) -> Option<TipoNodo> {
    match comando {
        CMD_GET | CMD_SET | CMD_SETNX | CMD_GETSET | CMD_GETDEL | CMD_APPEND | CMD_STRLEN
        | CMD_GETRANGE | CMD_SUBSTR | CMD_SETRANGE | CMD_INCR | CMD_INCRBY | CMD_DECR
        | CMD_DECRBY | CMD_INCRBYFLOAT | CMD_BITCOUNT => Some(TipoNodo::Cadena),

        CMD_HGET | CMD_HSET | CMD_HSETNX | CMD_HDEL | CMD_HEXISTS | CMD_HGETALL | CMD_HKEYS
        | CMD_HVALS | CMD_HLEN | CMD_HMGET | CMD_HMSET | CMD_HINCRBY | CMD_HINCRBYFLOAT
        | CMD_HSCAN => Some(TipoNodo::Hash),

        CMD_LPUSH | CMD_RPUSH | CMD_LPUSHX | CMD_RPUSHX | CMD_LPOP | CMD_RPOP | CMD_LLEN
        | CMD_LSET | CMD_LINDEX | CMD_LREM | CMD_LRANGE | CMD_LTRIM | CMD_LINSERT
        | CMD_RPOPLPUSH | CMD_BLPOP | CMD_BRPOP | CMD_BRPOPLPUSH => Some(TipoNodo::Lista),

        CMD_SADD | CMD_SREM | CMD_SCARD | CMD_SISMEMBER | CMD_SMEMBERS | CMD_SRANDMEMBER
        | CMD_SPOP | CMD_SDIFF | CMD_SINTER | CMD_SUNION | CMD_SDIFFSTORE | CMD_SINTERSTORE
        | CMD_SUNIONSTORE | CMD_SMOVE | CMD_SSCAN => Some(TipoNodo::Conjunto),

        CMD_KEYS | CMD_SCAN | CMD_EXISTS | CMD_RANDOMKEY | CMD_DEL | CMD_ADD => {
            Some(TipoNodo::Claves)
        }

        CMD_MGET | CMD_MSET | CMD_MSETNX => Some(TipoNodo::Cliente),

        _ => None,
    }
}

/// Indica si el comando exige que la clave ya exista. La sesion
/// responde 0 sin crear el actor cuando no se cumple
pub fn debe_existir(comando: &str) -> bool {
    matches!(comando, CMD_LPUSHX | CMD_RPUSHX)
}

/// Indica si el comando exige que la clave no exista. La sesion
/// responde 0 sin reenviar el payload cuando no se cumple
pub fn no_debe_existir(comando: &str) -> bool {
    comando == CMD_SETNX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comandos_de_string() {
        assert_eq!(tipo_de_comando("get"), Some(TipoNodo::Cadena));
        assert_eq!(tipo_de_comando("set"), Some(TipoNodo::Cadena));
        assert_eq!(tipo_de_comando("incrbyfloat"), Some(TipoNodo::Cadena));
        assert_eq!(tipo_de_comando("bitcount"), Some(TipoNodo::Cadena));
    }

    #[test]
    fn test_comandos_de_cada_coleccion() {
        assert_eq!(tipo_de_comando("hset"), Some(TipoNodo::Hash));
        assert_eq!(tipo_de_comando("rpoplpush"), Some(TipoNodo::Lista));
        assert_eq!(tipo_de_comando("sunionstore"), Some(TipoNodo::Conjunto));
    }

    #[test]
    fn test_comandos_del_directorio() {
        assert_eq!(tipo_de_comando("keys"), Some(TipoNodo::Claves));
        assert_eq!(tipo_de_comando("del"), Some(TipoNodo::Claves));
        assert_eq!(tipo_de_comando("exists"), Some(TipoNodo::Claves));
    }

    #[test]
    fn test_comandos_de_cliente() {
        assert_eq!(tipo_de_comando("mget"), Some(TipoNodo::Cliente));
        assert_eq!(tipo_de_comando("msetnx"), Some(TipoNodo::Cliente));
    }

    #[test]
    fn test_comando_desconocido() {
        assert_eq!(tipo_de_comando("flushall"), None);
        assert_eq!(tipo_de_comando(""), None);
    }

    #[test]
    fn test_precondiciones() {
        assert!(debe_existir("lpushx"));
        assert!(debe_existir("rpushx"));
        assert!(!debe_existir("lpush"));
        assert!(no_debe_existir("setnx"));
        assert!(!no_debe_existir("set"));
    }
}
