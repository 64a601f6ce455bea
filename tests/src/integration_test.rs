#[cfg(test)]
mod tests {

    use crate::utils::*;
    use std::collections::HashSet;
    use std::thread;
    use std::time::Duration;

    #[test]
    pub fn test_01_creacion_perezosa_y_tipo_fijo() {
        iniciar_servidor(9301);
        let mut conexion = Conexion::new(9301);

        assert_eq!(conexion.enviar("set foo bar"), "OK");
        assert_eq!(conexion.enviar("get foo"), "bar");

        // la clave quedo fijada al tipo string: un comando de hash
        // no la reconvierte ni crea nada
        let salida = conexion.enviar("hget foo campo");
        assert!(salida.contains("WRONGTYPE"));
        assert_eq!(conexion.enviar("get foo"), "bar");
    }

    #[test]
    pub fn test_02_guarda_de_existencia_obligatoria() {
        iniciar_servidor(9302);
        let mut conexion = Conexion::new(9302);

        assert_eq!(conexion.enviar("lpushx faltante x"), "0");
        assert_eq!(conexion.enviar("rpushx faltante x"), "0");
        // el actor no se creo
        assert_eq!(conexion.enviar("exists faltante"), "0");
    }

    #[test]
    pub fn test_03_guarda_de_no_existencia() {
        iniciar_servidor(9303);
        let mut conexion = Conexion::new(9303);

        assert_eq!(conexion.enviar("set k v1"), "OK");
        assert_eq!(conexion.enviar("setnx k v2"), "0");
        assert_eq!(conexion.enviar("get k"), "v1");

        // sobre una clave nueva si escribe
        assert_eq!(conexion.enviar("setnx otra v9"), "1");
        assert_eq!(conexion.enviar("get otra"), "v9");
    }

    #[test]
    pub fn test_04_union_de_sets_entre_claves() {
        iniciar_servidor(9304);
        let mut conexion = Conexion::new(9304);

        assert_eq!(conexion.enviar("sadd a 1 2 3"), "3");
        assert_eq!(conexion.enviar("sadd b 3 4 5"), "3");

        let esperado: HashSet<String> =
            ["1", "2", "3", "4", "5"].iter().map(|v| v.to_string()).collect();

        let union: HashSet<String> =
            conexion.enviar_multi("sunion a b", 5).into_iter().collect();
        assert_eq!(union, esperado);

        assert_eq!(conexion.enviar("sunionstore a b"), "5");
        let miembros: HashSet<String> =
            conexion.enviar_multi("smembers a", 5).into_iter().collect();
        assert_eq!(miembros, esperado);
    }

    #[test]
    pub fn test_05_rpoplpush() {
        iniciar_servidor(9305);
        let mut conexion = Conexion::new(9305);

        assert_eq!(conexion.enviar("rpush src x y z"), "3");
        assert_eq!(conexion.enviar("rpoplpush src dst"), "z");

        // el empuje al destino es asincronico
        thread::sleep(Duration::from_millis(200));
        assert_eq!(conexion.enviar_multi("lrange dst 0 1", 1), vec!["z"]);
        assert_eq!(conexion.enviar_multi("lrange src 0 2", 2), vec!["x", "y"]);
    }

    #[test]
    pub fn test_06_scan_con_glob() {
        iniciar_servidor(9306);
        let mut conexion = Conexion::new(9306);

        assert_eq!(conexion.enviar("sadd s foo1 foo2 bar"), "3");

        let salida = conexion.enviar_multi("sscan s 0 foo* 10", 3);
        assert_eq!(salida[0], "0");
        let encontrados: HashSet<String> = salida[1..].iter().cloned().collect();
        let esperado: HashSet<String> =
            ["foo1", "foo2"].iter().map(|v| v.to_string()).collect();
        assert_eq!(encontrados, esperado);
    }

    #[test]
    pub fn test_07_errores_de_parseo() {
        iniciar_servidor(9307);
        let mut conexion = Conexion::new(9307);

        assert_eq!(conexion.enviar("flushall ahora"), "Unknown command");
        assert_eq!(conexion.enviar("get"), "Too few parameters");
    }

    #[test]
    pub fn test_08_incr_desde_vacio() {
        iniciar_servidor(9308);
        let mut conexion = Conexion::new(9308);

        for esperado in 1..=5 {
            assert_eq!(conexion.enviar("incr contador"), esperado.to_string());
        }
        assert_eq!(conexion.enviar("get contador"), "5");
        assert_eq!(conexion.enviar("incrby contador 10"), "15");
    }

    #[test]
    pub fn test_09_mset_mget_msetnx() {
        iniciar_servidor(9309);
        let mut conexion = Conexion::new(9309);

        assert_eq!(conexion.enviar("mset a 1 b 2"), "OK");
        assert_eq!(conexion.enviar_multi("mget a b", 2), vec!["1", "2"]);

        // alguna clave existe: no escribe nada
        assert_eq!(conexion.enviar("msetnx a 9 c 3"), "0");
        assert_eq!(conexion.enviar("exists c"), "0");
        assert_eq!(conexion.enviar("get a"), "1");

        // ninguna existe: escribe todas
        assert_eq!(conexion.enviar("msetnx x 7 y 8"), "1");
        assert_eq!(conexion.enviar_multi("mget x y", 2), vec!["7", "8"]);
    }

    #[test]
    pub fn test_10_del_y_recreacion() {
        iniciar_servidor(9310);
        let mut conexion = Conexion::new(9310);

        assert_eq!(conexion.enviar("set k v"), "OK");
        assert_eq!(conexion.enviar("exists k"), "1");
        assert_eq!(conexion.enviar("del k"), "1");
        assert_eq!(conexion.enviar("exists k"), "0");
        assert_eq!(conexion.enviar("del k"), "0");

        // la clave renace con otro tipo y estado fresco
        assert_eq!(conexion.enviar("sadd k miembro"), "1");
        assert_eq!(conexion.enviar("scard k"), "1");
    }

    #[test]
    pub fn test_11_ida_y_vuelta_de_hash() {
        iniciar_servidor(9311);
        let mut conexion = Conexion::new(9311);

        assert_eq!(conexion.enviar("hset h campo valor"), "1");
        assert_eq!(conexion.enviar("hget h campo"), "valor");
        assert_eq!(conexion.enviar("hset h campo otro"), "0");
        assert_eq!(conexion.enviar("hget h campo"), "otro");
        assert_eq!(conexion.enviar("hlen h"), "1");
        assert_eq!(conexion.enviar("hdel h campo"), "1");
        assert_eq!(conexion.enviar("hget h campo"), "None");
    }

    #[test]
    pub fn test_12_keys_con_patron() {
        iniciar_servidor(9312);
        let mut conexion = Conexion::new(9312);

        assert_eq!(conexion.enviar("set usuario:1 ana"), "OK");
        assert_eq!(conexion.enviar("set usuario:2 juan"), "OK");
        assert_eq!(conexion.enviar("set otro x"), "OK");

        let filtradas: HashSet<String> = conexion
            .enviar_multi("keys usuario:*", 2)
            .into_iter()
            .collect();
        let esperado: HashSet<String> = ["usuario:1", "usuario:2"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(filtradas, esperado);

        assert_ne!(conexion.enviar("randomkey"), "None");
    }

    #[test]
    pub fn test_13_comandos_concurrentes_sobre_claves_distintas() {
        iniciar_servidor(9313);

        let mut hilos = Vec::new();
        for numero in 0..4 {
            hilos.push(thread::spawn(move || {
                let mut conexion = Conexion::new(9313);
                let clave = format!("contador{numero}");
                for _ in 0..20 {
                    conexion.enviar(&format!("incr {clave}"));
                }
            }));
        }
        for hilo in hilos {
            hilo.join().expect("el hilo del cliente falló");
        }

        // cada clave evoluciono de forma independiente
        let mut conexion = Conexion::new(9313);
        for numero in 0..4 {
            assert_eq!(conexion.enviar(&format!("get contador{numero}")), "20");
        }
    }

    #[test]
    pub fn test_14_serializacion_por_clave() {
        iniciar_servidor(9314);

        // dos clientes golpean la misma clave; el total se conserva
        let mut hilos = Vec::new();
        for _ in 0..2 {
            hilos.push(thread::spawn(move || {
                let mut conexion = Conexion::new(9314);
                for _ in 0..25 {
                    conexion.enviar("incr unica");
                }
            }));
        }
        for hilo in hilos {
            hilo.join().expect("el hilo del cliente falló");
        }

        let mut conexion = Conexion::new(9314);
        assert_eq!(conexion.enviar("get unica"), "50");
    }
}
