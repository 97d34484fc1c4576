use std::net::{TcpStream, ToSocketAddrs};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

/// Reachability of `addr` (host:port). A name that does not resolve counts as
/// offline.
pub fn probe(addr: &str, timeout: Duration) -> bool {
    let Ok(addrs) = addr.to_socket_addrs() else {
        return false;
    };
    addrs
        .into_iter()
        .any(|a| TcpStream::connect_timeout(&a, timeout).is_ok())
}

/// Probes `addr` every `interval` and sends the new state only when it
/// differs from the last one reported. `initial` is the state the caller
/// already knows about.
pub fn spawn_monitor(addr: String, interval: Duration, initial: bool) -> mpsc::Receiver<bool> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut last = initial;

        loop {
            thread::sleep(interval);

            let online = probe(&addr, PROBE_TIMEOUT.min(interval));
            if online != last {
                last = online;
                if tx.send(online).is_err() {
                    break;
                }
            }
        }
    });

    rx
}
