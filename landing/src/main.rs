fn main() {
    zeve_landing::shell::run();
}
