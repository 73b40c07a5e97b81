#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// What the mock server answers to every query.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    /// NOERROR with one NS record per entry, in order
    Nameservers(Vec<String>),
    NxDomain,
    ServFail,
    /// Never reply
    Silent,
    /// Empty UDP answer with TC=1; the full NS set only over TCP
    TruncatedUdp(Vec<String>),
    /// NS set under a transaction id that does not match the query
    WrongId(Vec<String>),
}

/// Minimal DNS server for NS lookups in tests, on UDP and TCP (same port).
///
/// Echoes the question and appends hand-encoded answers, so tests do not
/// depend on real DNS.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an OS-assigned port on 127.0.0.1.
    pub async fn start(answer: MockAnswer) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len], &answer, false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            let answer = answer.clone();
                            tokio::spawn(async move {
                                let _ = Self::serve_tcp(stream, &answer).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// One length-prefixed query, one length-prefixed answer.
    async fn serve_tcp(mut stream: TcpStream, answer: &MockAnswer) -> std::io::Result<()> {
        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await?;
        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream.read_exact(&mut query).await?;

        if let Some(response) = Self::build_response(&query, answer, true) {
            let mut frame = (response.len() as u16).to_be_bytes().to_vec();
            frame.extend_from_slice(&response);
            stream.write_all(&frame).await?;
        }
        Ok(())
    }

    fn build_response(query: &[u8], answer: &MockAnswer, over_tcp: bool) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let mut truncated = false;
        let mut id = [query[0], query[1]];
        let (rcode, nameservers): (u8, &[String]) = match answer {
            MockAnswer::Nameservers(ns) => (0, ns.as_slice()),
            MockAnswer::NxDomain => (3, &[]),
            MockAnswer::ServFail => (2, &[]),
            MockAnswer::Silent => return None,
            MockAnswer::TruncatedUdp(ns) if over_tcp => (0, ns.as_slice()),
            MockAnswer::TruncatedUdp(_) => {
                truncated = true;
                (0, &[])
            }
            MockAnswer::WrongId(ns) => {
                id[0] ^= 0xff;
                (0, ns.as_slice())
            }
        };

        let mut response = Vec::with_capacity(512);

        // Transaction ID
        response.extend_from_slice(&id);

        // QR=1, TC, RD=1 / RA=1 + RCODE
        response.push(if truncated { 0x83 } else { 0x81 });
        response.push(0x80 | rcode);

        // QDCOUNT from the query
        response.extend_from_slice(&query[4..6]);

        // ANCOUNT
        response.extend_from_slice(&(nameservers.len() as u16).to_be_bytes());

        // NSCOUNT, ARCOUNT
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        // Question section
        response.extend_from_slice(&query[12..]);

        for ns in nameservers {
            let rdata = Self::encode_name(ns);
            response.extend_from_slice(&[
                0xc0, 0x0c, // Name pointer to question
                0x00, 0x02, // Type NS
                0x00, 0x01, // Class IN
                0x00, 0x02, 0xa3, 0x00, // TTL: 172800
            ]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        Some(response)
    }

    fn encode_name(name: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(name.len() + 2);
        for label in name.trim_end_matches('.').split('.') {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
