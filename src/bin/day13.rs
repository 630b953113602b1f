use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use joinery::prelude::*;

use advent::{run, ParseError, Solution};

fn main() -> anyhow::Result<()> {
    run(solve)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

use Packet::*;

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (List(a), List(b)) => a.iter().cmp(b.iter()),
            (Int(a), List(b)) => [Int(*a)].iter().cmp(b.iter()),
            (List(a), Int(b)) => a.iter().cmp([Int(*b)].iter()),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Int(value) => value.fmt(f),
            List(items) => write!(f, "[{}]", items.iter().join_with(",")),
        }
    }
}

struct PacketParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> PacketParser<'a> {
    fn malformed(&self) -> ParseError {
        ParseError::malformed("packet", self.text)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.malformed()),
        }
    }

    fn packet(&mut self) -> Result<Packet, ParseError> {
        match self.peek() {
            Some(b'[') => self.list(),
            Some(b) if b.is_ascii_digit() => self.int(),
            Some(_) => Err(self.malformed()),
            None => Err(ParseError::UnexpectedEnd("packet")),
        }
    }

    fn int(&mut self) -> Result<Packet, ParseError> {
        let start = self.pos;
        while self.peek().map_or(false, |b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        Ok(Int(self.text[start..self.pos].parse()?))
    }

    fn list(&mut self) -> Result<Packet, ParseError> {
        self.expect(b'[')?;
        let mut items = Vec::new();

        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(List(items));
        }

        loop {
            items.push(self.packet()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(List(items));
                }
                Some(_) => return Err(self.malformed()),
                None => return Err(ParseError::UnexpectedEnd("packet")),
            }
        }
    }
}

impl FromStr for Packet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let text = s.trim();
        let mut parser = PacketParser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        };

        let packet = parser.packet()?;
        if parser.pos != text.len() {
            return Err(parser.malformed());
        }
        Ok(packet)
    }
}

fn divider(value: u32) -> Packet {
    List(vec![List(vec![Int(value)])])
}

fn solve(input: &str) -> impl Display {
    let mut packets: Vec<Packet> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.parse().unwrap_or_else(|err| panic!("{}", err)))
        .collect();

    let ordered_pairs: usize = packets
        .chunks(2)
        .zip(1..)
        .filter(|(pair, _)| pair[0] < pair[1])
        .map(|(_, index)| index)
        .sum();

    let dividers = [divider(2), divider(6)];
    packets.extend(dividers.iter().cloned());
    packets.sort();

    let decoder_key: usize = dividers
        .iter()
        .map(|d| packets.binary_search(d).map(|i| i + 1).unwrap_or(0))
        .product();

    Solution::new(ordered_pairs, decoder_key)
}
