mod businesses;
